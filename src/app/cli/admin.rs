//! Admin commands: login gate plus catalog CRUD.

use clap::Subcommand;
use dialoguer::{Input, Password};

use crate::domain::{AppError, ItemDraft};
use crate::services::format_amount;

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Log in as the configured admin
    Login {
        /// Username; prompted for when omitted
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Log out
    Logout,
    /// List catalog items with their ids
    #[clap(visible_alias = "ls")]
    List,
    /// Create a menu item on the remote service, then reload the menu
    Add {
        name: String,
        category: String,
        price: f64,
        #[arg(default_value = "")]
        desc: String,
        #[arg(default_value = "")]
        img: String,
        /// Create in the local catalog only, skipping the remote service
        #[arg(long)]
        local: bool,
    },
    /// Replace every field of an existing item
    Edit {
        id: u32,
        name: String,
        category: String,
        price: f64,
        #[arg(default_value = "")]
        desc: String,
        #[arg(default_value = "")]
        img: String,
    },
    /// Delete an item (existing cart lines keep their snapshot)
    #[clap(visible_alias = "rm")]
    Delete { id: u32 },
}

pub fn run_admin(offline: bool, command: AdminCommands) -> Result<(), AppError> {
    let mut engine = super::open_storefront(offline)?;

    match command {
        AdminCommands::Login { user } => {
            let username = match user {
                Some(user) => user,
                None => prompt_text("Username")?,
            };
            let password = Password::new()
                .with_prompt("Password")
                .interact()
                .map_err(|e| AppError::Configuration(format!("Prompt failed: {}", e)))?;

            engine.login(&username, &password)?;
            println!("✅ Logged in as {}", username);
            Ok(())
        }
        AdminCommands::Logout => {
            engine.logout()?;
            println!("✅ Logged out");
            Ok(())
        }
        AdminCommands::List => {
            require_login(&engine)?;
            for item in engine.catalog_items() {
                println!(
                    "  #{:<3} {} — {} — ₹{}",
                    item.id,
                    item.name,
                    item.category,
                    format_amount(item.price)
                );
            }
            Ok(())
        }
        AdminCommands::Add { name, category, price, desc, img, local } => {
            require_login(&engine)?;
            let draft = ItemDraft { name, category, price, desc, img };
            if local {
                let item = engine.create_item_local(draft)?;
                println!("✅ Added #{} {}", item.id, item.name);
            } else {
                let count = engine.create_item(draft)?;
                println!("✅ Item added; menu reloaded ({} items)", count);
            }
            Ok(())
        }
        AdminCommands::Edit { id, name, category, price, desc, img } => {
            require_login(&engine)?;
            engine.update_item(id, ItemDraft { name, category, price, desc, img })?;
            println!("✅ Updated #{}", id);
            Ok(())
        }
        AdminCommands::Delete { id } => {
            require_login(&engine)?;
            if engine.delete_item(id)? {
                println!("✅ Deleted #{}", id);
            } else {
                println!("Nothing to delete: no item #{}", id);
            }
            Ok(())
        }
    }
}

fn require_login(engine: &crate::DefaultStorefront) -> Result<(), AppError> {
    if engine.is_admin()? {
        Ok(())
    } else {
        Err(AppError::Configuration(
            "Admin login required. Run 'bistro admin login' first.".into(),
        ))
    }
}

fn prompt_text(label: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::Configuration(format!("Prompt failed: {}", e)))
}
