//! The storefront engine: owns the catalog and cart, keeps them consistent,
//! and persists every mutation synchronously through the injected store.

use chrono::Utc;

use crate::domain::{
    AdminConfig, AppError, BillingSnapshot, Cart, CartChange, Catalog, ItemDraft, MenuItem,
    MenuSection, StorefrontConfig,
};
use crate::ports::{ChangeNotifier, MenuClient, SilentNotifier, StateChange, StorefrontStore};

/// Default customer display name when none has been stored.
const DEFAULT_CUSTOMER: &str = "Guest";

/// Application service tying catalog, cart and billing together.
///
/// Store and client are injected so the engine runs identically against the
/// filesystem store and HTTP client, or fully in memory under test. Every
/// mutating operation persists before returning; a view refresh immediately
/// after any call observes durable state.
pub struct Storefront<S: StorefrontStore, C: MenuClient> {
    catalog: Catalog,
    cart: Cart,
    store: S,
    client: C,
    notifier: Box<dyn ChangeNotifier>,
    admin: AdminConfig,
}

impl<S: StorefrontStore, C: MenuClient> Storefront<S, C> {
    /// Open a storefront over persisted state. Missing keys mean an empty
    /// catalog/cart; a persisted cart is repaired of zero-quantity lines.
    pub fn open(store: S, client: C, config: &StorefrontConfig) -> Result<Self, AppError> {
        let catalog = Catalog::new(store.load_catalog()?.unwrap_or_default());
        let cart = Cart::from_lines(store.load_cart()?.unwrap_or_default());
        Ok(Self {
            catalog,
            cart,
            store,
            client,
            notifier: Box::new(SilentNotifier),
            admin: config.admin.clone(),
        })
    }

    /// Replace the notifier the engine emits state changes through.
    pub fn set_notifier(&mut self, notifier: Box<dyn ChangeNotifier>) {
        self.notifier = notifier;
    }

    fn emit(&self, change: StateChange) {
        self.notifier.notify(&change);
    }

    // --- catalog -----------------------------------------------------------

    pub fn catalog_items(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    pub fn find_item(&self, id: u32) -> Option<&MenuItem> {
        self.catalog.find(id)
    }

    /// Grouped menu view for the browsing page. An empty result is a valid
    /// "no results" view, not an error.
    pub fn menu(&self, filter: Option<&str>) -> Vec<MenuSection> {
        Catalog::group_by_category(self.catalog.search(filter.unwrap_or("")))
    }

    /// Fetch the full menu from the remote source and replace the catalog
    /// wholesale. A failed fetch leaves both the in-memory and the persisted
    /// catalog untouched.
    pub fn reload_menu(&mut self) -> Result<usize, AppError> {
        let items = self.client.fetch_menu()?;
        self.store.save_catalog(&items)?;
        self.catalog.replace_all(items);
        self.emit(StateChange::CatalogChanged);
        Ok(self.catalog.len())
    }

    /// Best-effort startup sync: reload from remote, silently keeping the
    /// last persisted catalog when the fetch fails. Returns whether the
    /// remote load succeeded.
    pub fn sync_menu(&mut self) -> bool {
        self.reload_menu().is_ok()
    }

    // --- cart --------------------------------------------------------------

    pub fn cart_lines(&self) -> &[crate::domain::CartLine] {
        self.cart.lines()
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn quantity_of(&self, id: u32) -> u32 {
        self.cart.quantity_of(id)
    }

    /// Add one unit of the item to the cart, snapshotting name/price on the
    /// first unit. Returns the line's new quantity; `ItemNotFound` when the
    /// id does not resolve (callers may treat that as a no-op).
    pub fn add_to_cart(&mut self, id: u32) -> Result<u32, AppError> {
        let item = self.catalog.find(id).ok_or(AppError::ItemNotFound(id))?.clone();
        let qty = self.cart.add(&item);
        self.store.save_cart(self.cart.lines())?;
        self.emit(StateChange::ItemAdded { name: item.name });
        self.emit(StateChange::CartChanged);
        Ok(qty)
    }

    /// Apply a quantity delta. No existing line plus a positive delta behaves
    /// exactly as `add_to_cart`; a resulting quantity <= 0 removes the line.
    /// The cart is persisted after every call.
    pub fn change_qty(&mut self, id: u32, delta: i32) -> Result<CartChange, AppError> {
        if self.cart.quantity_of(id) == 0 && delta > 0 {
            return self.add_to_cart(id).map(CartChange::Set);
        }
        let change = self.cart.change_qty(id, delta);
        self.store.save_cart(self.cart.lines())?;
        if change != CartChange::Ignored {
            self.emit(StateChange::CartChanged);
        }
        Ok(change)
    }

    // --- checkout ----------------------------------------------------------

    /// Freeze the cart into a billing snapshot, persist it under its own key,
    /// then clear and persist the live cart. An empty cart aborts with no
    /// state change.
    pub fn checkout(&mut self) -> Result<BillingSnapshot, AppError> {
        let customer = self.customer_name()?;
        let bill = BillingSnapshot::issue(&self.cart, &customer, Utc::now())?;
        self.store.save_last_bill(&bill)?;
        self.cart.clear();
        self.store.save_cart(self.cart.lines())?;
        self.emit(StateChange::BillIssued { bill_no: bill.bill_no.clone() });
        self.emit(StateChange::CartChanged);
        Ok(bill)
    }

    /// The most recently issued bill, for the billing view.
    pub fn last_bill(&self) -> Result<Option<BillingSnapshot>, AppError> {
        self.store.load_last_bill()
    }

    pub fn customer_name(&self) -> Result<String, AppError> {
        Ok(self.store.load_customer_name()?.unwrap_or_else(|| DEFAULT_CUSTOMER.to_string()))
    }

    pub fn set_customer_name(&self, name: &str) -> Result<(), AppError> {
        self.store.save_customer_name(name)
    }

    // --- admin -------------------------------------------------------------

    /// Create an item on the remote side, then reload the whole menu rather
    /// than trusting a local optimistic insert.
    pub fn create_item(&mut self, draft: ItemDraft) -> Result<usize, AppError> {
        draft.validate()?;
        let ack = self.client.create_item(&draft)?;
        if !ack.success {
            return Err(AppError::RemoteRejected(
                ack.message.unwrap_or_else(|| "no reason given".to_string()),
            ));
        }
        self.reload_menu()
    }

    /// Create an item in the local catalog only (offline admin path).
    pub fn create_item_local(&mut self, draft: ItemDraft) -> Result<MenuItem, AppError> {
        let item = self.catalog.create(draft)?.clone();
        self.store.save_catalog(self.catalog.items())?;
        self.emit(StateChange::CatalogChanged);
        Ok(item)
    }

    /// Replace an existing item's fields in place. The id never changes.
    pub fn update_item(&mut self, id: u32, draft: ItemDraft) -> Result<(), AppError> {
        self.catalog.update(id, draft)?;
        self.store.save_catalog(self.catalog.items())?;
        self.emit(StateChange::CatalogChanged);
        Ok(())
    }

    /// Delete an item if present; reports whether anything was removed.
    /// Existing cart lines for the id stay valid (they are snapshots).
    pub fn delete_item(&mut self, id: u32) -> Result<bool, AppError> {
        let removed = self.catalog.remove(id);
        self.store.save_catalog(self.catalog.items())?;
        if removed {
            self.emit(StateChange::CatalogChanged);
        }
        Ok(removed)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<(), AppError> {
        if !self.admin.verify(username, password) {
            return Err(AppError::InvalidCredentials);
        }
        self.store.set_admin_logged_in(true)
    }

    pub fn logout(&self) -> Result<(), AppError> {
        self.store.set_admin_logged_in(false)
    }

    pub fn is_admin(&self) -> Result<bool, AppError> {
        self.store.admin_logged_in()
    }
}
