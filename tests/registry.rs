use std::sync::{Arc, Mutex};

use tabulist::column::{ColumnDescriptor, Row, SortType};
use tabulist::registry::{Widget, WidgetRegistry};
use tabulist::source::memory::MemorySource;
use tabulist::table::{TableController, TableOptions};
use tabulist::ui::TableView;

struct CountingWidget {
    teardowns: Arc<Mutex<u32>>,
}

impl Widget for CountingWidget {
    fn teardown(&mut self) {
        *self.teardowns.lock().unwrap() += 1;
    }
}

#[test]
fn registering_a_new_instance_displaces_and_tears_down_the_prior_one() {
    let teardowns = Arc::new(Mutex::new(0));
    let mut registry = WidgetRegistry::new();

    let displaced = registry.register(
        "notification",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );
    assert!(displaced.is_none());
    assert!(registry.contains("notification"));

    let displaced = registry.register(
        "notification",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );
    assert!(displaced.is_some());
    assert_eq!(*teardowns.lock().unwrap(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn deregister_tears_down_and_removes() {
    let teardowns = Arc::new(Mutex::new(0));
    let mut registry = WidgetRegistry::new();
    registry.register(
        "tooltip",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );

    assert!(registry.deregister("tooltip"));
    assert_eq!(*teardowns.lock().unwrap(), 1);
    assert!(!registry.contains("tooltip"));
    assert!(registry.is_empty());

    // Deregistering an absent kind is a no-op.
    assert!(!registry.deregister("tooltip"));
}

#[test]
fn get_mut_borrows_the_live_instance() {
    let teardowns = Arc::new(Mutex::new(0));
    let mut registry = WidgetRegistry::new();
    registry.register(
        "notification",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );

    let widget = registry.get_mut("notification").unwrap();
    widget.teardown();
    assert_eq!(*teardowns.lock().unwrap(), 1);

    assert!(registry.get_mut("absent").is_none());
}

#[test]
fn clear_tears_down_every_live_instance() {
    let teardowns = Arc::new(Mutex::new(0));
    let mut registry = WidgetRegistry::new();
    registry.register(
        "notification",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );
    registry.register(
        "tooltip",
        Box::new(CountingWidget {
            teardowns: teardowns.clone(),
        }),
    );

    registry.clear();

    assert_eq!(*teardowns.lock().unwrap(), 2);
    assert!(registry.is_empty());
}

#[tokio::test]
async fn table_controllers_register_as_widgets() {
    let columns = vec![ColumnDescriptor::new("title", "Name").sortable(SortType::Text)];
    let source = MemorySource::new(columns.clone(), vec![Row::new().with("title", "a")]);
    let mut controller =
        TableController::new(columns, source, TableView::new(), TableOptions::default()).unwrap();
    controller.init().await;
    assert_eq!(controller.rows().len(), 1);

    let mut registry = WidgetRegistry::new();
    registry.register("table", Box::new(controller));
    assert!(registry.contains("table"));
    assert!(registry.deregister("table"));
}
