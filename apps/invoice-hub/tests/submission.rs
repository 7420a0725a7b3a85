//! End-to-end submission flow through the app commands.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use invoice_core::{
    Catalog, Directory, DraftDefaults, DraftHeaderPatch, FieldPath, InvoiceDraft, InvoicePayload,
    InvoiceStatus, LineItem, ListQuery, Money, Percent,
};
use invoice_hub::commands::customer::list_customers;
use invoice_hub::commands::draft::{add_item, remove_item, set_discount, set_header, set_shipping};
use invoice_hub::commands::invoice::{list_invoices, submit_draft};
use invoice_hub::error::{ErrorCode, StoreError};
use invoice_hub::state::{ConfigState, DraftState};
use invoice_hub::store::{InvoiceStore, MemoryStore, StoredInvoice};
use invoice_hub::App;

/// Store that counts calls and always fails.
#[derive(Default)]
struct FailingStore {
    calls: AtomicUsize,
}

impl InvoiceStore for FailingStore {
    async fn save(&self, _invoice: InvoicePayload) -> Result<StoredInvoice, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
        Ok(Vec::new())
    }
}

/// Store that edits the form while the save is in flight.
struct EditingStore {
    inner: MemoryStore,
    draft: DraftState,
}

impl InvoiceStore for EditingStore {
    async fn save(&self, invoice: InvoicePayload) -> Result<StoredInvoice, StoreError> {
        self.draft.with_draft_mut(|d| d.shipping = Money::from_major(40));
        self.inner.save(invoice).await
    }

    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
        self.inner.list().await
    }
}

fn draft(number: &str) -> InvoiceDraft {
    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    InvoiceDraft::new(&DraftDefaults::default(), &Catalog::sample(), today, number)
}

fn app<S: InvoiceStore>(store: S, number: &str) -> App<S> {
    let app = App::new(ConfigState::default(), Catalog::sample(), store);
    app.draft.replace(draft(number));
    app
}

#[tokio::test]
async fn test_submit_valid_draft() {
    let app = app(MemoryStore::new(), "INV-4821");

    let result = submit_draft(&app.draft, &app.config, &app.catalog, &app.store)
        .await
        .unwrap();

    assert_eq!(result.acknowledgement.title, "Invoice created");
    assert_eq!(result.acknowledgement.description, "#INV-4821 for ABC Corporation");
    assert_eq!(result.redirect, "/invoices");
    assert_eq!(result.invoice.currency_symbol, "₹");
    assert_eq!(result.invoice.totals.total, Money::from_major(1180));

    // The store holds the payload and the form starts over
    let stored = app.store.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, result.invoice_id);
    assert_ne!(app.draft.snapshot(), draft("INV-4821"));
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_store() {
    let app = app(FailingStore::default(), "INV-1000");
    app.draft.with_draft_mut(|d| d.items.clear());
    let before = app.draft.snapshot();

    let err = submit_draft(&app.draft, &app.config, &app.catalog, &app.store)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValidationError);
    let fields = err.field_errors.unwrap();
    assert_eq!(fields.len(), 1);
    assert!(fields.contains_key(&FieldPath::from("items")));
    assert_eq!(app.store.calls.load(Ordering::SeqCst), 0);
    assert_eq!(app.draft.snapshot(), before);
}

#[tokio::test]
async fn test_store_failure_keeps_draft() {
    let app = app(FailingStore::default(), "INV-1000");
    let before = app.draft.snapshot();

    let err = submit_draft(&app.draft, &app.config, &app.catalog, &app.store)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::PersistenceError);
    assert_eq!(app.store.calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.draft.snapshot(), before);
}

#[tokio::test]
async fn test_duplicate_number_is_persistence_error() {
    let app = app(MemoryStore::new(), "INV-2000");
    submit_draft(&app.draft, &app.config, &app.catalog, &app.store)
        .await
        .unwrap();

    app.draft.replace(draft("INV-2000"));
    let err = submit_draft(&app.draft, &app.config, &app.catalog, &app.store)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::PersistenceError);
    assert_eq!(err.message, "Invoice INV-2000 already exists");
}

#[tokio::test]
async fn test_edit_submit_and_list() {
    let store = MemoryStore::new();
    let config = ConfigState::default();
    let catalog = Catalog::sample();
    let state = DraftState::new(draft("INV-3000"));

    set_header(
        &state,
        &catalog,
        DraftHeaderPatch {
            customer_id: Some("c2".to_string()),
            currency: Some("USD".to_string()),
            ..Default::default()
        },
    );
    remove_item(&state, &catalog, 0).unwrap();
    add_item(
        &state,
        &catalog,
        Some(LineItem::new("Design", 2, Money::from_major(50), Percent::from_whole(10))),
    );
    add_item(
        &state,
        &catalog,
        Some(LineItem::new("Hosting", 1, Money::from_major(20), Percent::zero())),
    );
    set_discount(&state, &config, &catalog, "10").unwrap();
    let response = set_shipping(&state, &config, &catalog, "15").unwrap();
    assert_eq!(response.formatted.total, "$ 133.00");

    let result = submit_draft(&state, &config, &catalog, &store).await.unwrap();
    assert_eq!(result.acknowledgement.description, "#INV-3000 for XYZ Ltd");
    assert_eq!(result.invoice.totals.total, Money::from_major(133));

    let page = list_invoices(&store, &config, None).await.unwrap();
    assert_eq!(page.total_matches, 1);
    assert_eq!(page.per_page, 6);
    assert_eq!(page.items[0].client, "XYZ Ltd");
    assert_eq!(page.items[0].status, InvoiceStatus::Pending);

    let paid = list_invoices(
        &store,
        &config,
        Some(ListQuery::new(6).filter(InvoiceStatus::Paid)),
    )
    .await
    .unwrap();
    assert_eq!(paid.total_matches, 0);
}

#[tokio::test]
async fn test_edit_during_save_is_not_discarded() {
    let config = ConfigState::default();
    let catalog = Catalog::sample();
    let state = DraftState::new(draft("INV-5000"));
    let store = EditingStore {
        inner: MemoryStore::new(),
        draft: state.clone(),
    };

    let result = submit_draft(&state, &config, &catalog, &store).await.unwrap();

    // The saved invoice is the snapshot; the later edit stays in the form
    assert_eq!(result.invoice.totals.shipping, Money::zero());
    let current = state.snapshot();
    assert_eq!(current.invoice_number, "INV-5000");
    assert_eq!(current.shipping, Money::from_major(40));
}

#[test]
fn test_app_serves_directory_tables() {
    let app = App::new(ConfigState::default(), Catalog::sample(), MemoryStore::new())
        .with_directory(Directory::sample());

    let response = list_customers(&app.config, &app.catalog, &app.directory.customers, None);
    assert_eq!(response.total_customers, 5);
    assert_eq!(response.active_customers, 4);
    assert_eq!(response.formatted_revenue, "₹ 173,750.00");

    let empty = App::new(ConfigState::default(), Catalog::sample(), MemoryStore::new());
    assert!(empty.directory.customers.is_empty());
}
