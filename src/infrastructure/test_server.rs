// In-process HTTP server standing in for Azure AD and the Power BI API
use axum::Router;

/// Serve `router` on an ephemeral local port and return its base URL (with trailing slash)
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}
