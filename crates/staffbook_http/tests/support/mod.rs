use staffbook_core::db::open_db_in_memory;
use staffbook_http::{router, serve, AppState, Store, Variant};
use tokio::net::TcpListener;

/// Starts a server for `variant` on an ephemeral port with a fresh
/// in-memory store and returns its base URL.
pub async fn spawn_server(variant: Variant) -> String {
    let conn = open_db_in_memory().unwrap();
    let app = router(variant, AppState::new(Store::new(conn).unwrap()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
