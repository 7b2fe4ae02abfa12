#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Couldn't read site configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Catalog(#[from] portfolio_site::catalog::CatalogError),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let res = serve().await;
    if let Err(e) = &res {
        tracing::error!(error = %e, "server exited");
    }
    res
}

#[cfg(feature = "ssr")]
async fn serve() -> Result<(), StartupError> {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, catalog::Catalog};

    let conf = get_configuration(None).map_err(|e| StartupError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    let catalog = Arc::new(Catalog::embedded()?);
    tracing::info!(projects = catalog.len(), "loaded project catalog");

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let context = move || provide_context(catalog.clone());
    let app = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            context, shell,
        ))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
