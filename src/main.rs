//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use painel_vendas::{
    config::{AppConfig, AppState},
    routes::create_router,
};

#[tokio::main]
async fn main() {
    // RUST_LOG sobrescreve o nível padrão (ex.: RUST_LOG=painel_vendas=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let config = AppConfig::from_env().expect("Falha ao ler a configuração.");
    let addr = config.server_addr.clone();

    let app_state = AppState::new(config)
        .expect("Falha ao inicializar o estado da aplicação.");

    let app = create_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    tracing::info!("📚 Documentação em http://{}/swagger-ui", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
