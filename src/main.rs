use env_logger::Env;
use palate::{configuration::get_configuration, startup::run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;
    log::info!(
        "Harvesting reviews for {} into {}",
        configuration.application.location,
        configuration.application.output_path.display()
    );

    run(configuration).await
}
