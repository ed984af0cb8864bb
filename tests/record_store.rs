use docstore_rust::{
    generate_id, AccountCredentials, Connection, InMemoryClient, Record, StoreError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Record)]
struct Todo {
    id: String,
    task: String,
    completed: bool,
    #[serde(default, rename = "_etag", skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
}

impl Todo {
    fn new(task: &str) -> Self {
        Todo {
            id: generate_id(),
            task: task.to_string(),
            completed: false,
            etag: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Record)]
#[record(container = "Orders")]
struct Order {
    id: String,
    #[record(partition_key)]
    tenant_id: String,
    total: u32,
}

// Manual impl, no derive
#[derive(Serialize, Deserialize)]
struct Profile {
    id: String,
    display_name: String,
}

impl Record for Profile {
    const CONTAINER: &'static str = "Profile";

    fn id(&self) -> &str {
        &self.id
    }
}

fn connection() -> Connection {
    Connection::open(
        InMemoryClient::new(),
        AccountCredentials::new("https://localhost:8081", "secret"),
        "appdb",
    )
}

// --- Round Trips ---

#[test]
fn save_then_get_round_trips_caller_fields() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let todo = Todo::new("write tests");
    let saved = todos.save(&todo).unwrap();

    let loaded = todos.get(todo.id.as_str()).unwrap();
    assert_eq!(loaded.id, todo.id);
    assert_eq!(loaded.task, "write tests");
    assert!(!loaded.completed);
    assert_eq!(loaded, saved);
}

#[test]
fn save_captures_server_assigned_etag() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let todo = Todo::new("first");
    let saved = todos.save(&todo).unwrap();
    assert_eq!(saved.etag.as_deref(), Some("1"));

    let saved_again = todos.save(&saved).unwrap();
    assert_eq!(saved_again.etag.as_deref(), Some("2"));
}

#[test]
fn save_is_an_upsert() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let mut todo = Todo::new("draft");
    todos.save(&todo).unwrap();

    todo.task = "final".to_string();
    todo.completed = true;
    todos.save(&todo).unwrap();

    let loaded = todos.get(todo.id.as_str()).unwrap();
    assert_eq!(loaded.task, "final");
    assert!(loaded.completed);
}

#[test]
fn record_types_resolve_distinct_containers() {
    let connection = connection();
    let todos = connection.records::<Todo>();
    let profiles = connection.records::<Profile>();

    let shared_id = generate_id();
    todos
        .save(&Todo {
            id: shared_id.clone(),
            task: "overlap".to_string(),
            completed: false,
            etag: None,
        })
        .unwrap();
    profiles
        .save(&Profile {
            id: shared_id.clone(),
            display_name: "Sam".to_string(),
        })
        .unwrap();

    assert_eq!(todos.get(shared_id.as_str()).unwrap().task, "overlap");
    assert_eq!(
        profiles.get(shared_id.as_str()).unwrap().display_name,
        "Sam"
    );
}

// --- Not Found ---

#[test]
fn get_missing_record_is_not_found() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let err = todos.get("nonexistent-id").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn delete_removes_the_record() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let todo = Todo::new("ephemeral");
    todos.save(&todo).unwrap();
    todos.delete(&todo).unwrap();

    let err = todos.get(todo.id.as_str()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn delete_of_absent_record_is_not_found() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let todo = Todo::new("never saved");
    let err = todos.delete(&todo).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    todos.save(&todo).unwrap();
    todos.delete(&todo).unwrap();
    let err = todos.delete(&todo).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

// --- Partition Keys ---

#[test]
fn get_without_partition_key_fails_for_tenant_partitioned_type() {
    let connection = connection();
    let orders = connection.records::<Order>();

    let order = Order {
        id: generate_id(),
        tenant_id: "tenant-1".to_string(),
        total: 12,
    };
    orders.save(&order).unwrap();

    let err = orders.get(order.id.as_str()).unwrap_err();
    assert!(matches!(err, StoreError::MissingPartitionKey { .. }));
}

#[test]
fn get_with_partition_key_routes_to_the_record() {
    let connection = connection();
    let orders = connection.records::<Order>();

    let order = Order {
        id: generate_id(),
        tenant_id: "tenant-1".to_string(),
        total: 12,
    };
    orders.save(&order).unwrap();

    let loaded = orders.get((order.id.as_str(), "tenant-1")).unwrap();
    assert_eq!(loaded.total, 12);
    assert_eq!(loaded.tenant_id, "tenant-1");
}

#[test]
fn get_with_wrong_partition_key_is_not_found() {
    let connection = connection();
    let orders = connection.records::<Order>();

    let order = Order {
        id: generate_id(),
        tenant_id: "tenant-1".to_string(),
        total: 12,
    };
    orders.save(&order).unwrap();

    let err = orders.get((order.id.as_str(), "tenant-2")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn supplied_partition_key_is_honored_for_id_partitioned_types() {
    let connection = connection();
    let todos = connection.records::<Todo>();

    let todo = Todo::new("routed");
    todos.save(&todo).unwrap();

    // the id doubles as the partition key
    let loaded = todos.get((todo.id.as_str(), todo.id.as_str())).unwrap();
    assert_eq!(loaded.task, "routed");

    let err = todos.get((todo.id.as_str(), "elsewhere")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn delete_routes_by_the_records_partition_key() {
    let connection = connection();
    let orders = connection.records::<Order>();

    let order = Order {
        id: generate_id(),
        tenant_id: "tenant-1".to_string(),
        total: 3,
    };
    orders.save(&order).unwrap();
    orders.delete(&order).unwrap();

    let err = orders.get((order.id.as_str(), "tenant-1")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

// --- Derive ---

#[test]
fn derive_defaults_container_to_the_type_name() {
    assert_eq!(<Todo as Record>::CONTAINER, "Todo");
    assert_eq!(<Todo as Record>::PARTITION_KEY_FIELD, "id");
}

#[test]
fn derive_honors_container_and_partition_key_attributes() {
    assert_eq!(<Order as Record>::CONTAINER, "Orders");
    assert_eq!(<Order as Record>::PARTITION_KEY_FIELD, "tenant_id");

    let order = Order {
        id: "o-1".to_string(),
        tenant_id: "tenant-9".to_string(),
        total: 0,
    };
    assert_eq!(order.partition_key(), "tenant-9");
}
