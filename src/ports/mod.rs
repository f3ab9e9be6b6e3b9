mod menu_client;
mod notifier;
mod storefront_store;

pub use menu_client::{CreateItemAck, MenuClient};
pub use notifier::{ChangeNotifier, SilentNotifier, StateChange};
pub use storefront_store::StorefrontStore;
