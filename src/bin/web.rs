#[tokio::main]
async fn main() {
    // submission events go to stderr, filtered by RUST_LOG.
    tracing_subscriber::fmt::init();

    let server = fscript::web::get_server();

    // expose the token inspector on every interface.
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    axum::serve(listener, server).await.unwrap();
}
