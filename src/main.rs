use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use student_reports::config::{DatabaseConfig, EnvironmentConfig};
use student_reports::database::{ConnectionManager, MongoConnector};
use student_reports::services::{run_report_sequence, ReportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let environment = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(environment.log_level)
        .init();

    info!("🎓 Student Reports - MongoDB");
    info!("============================");

    let db_config = DatabaseConfig::from_env()?;
    let mut service = ReportService::new(ConnectionManager::new(MongoConnector::new(db_config)));

    let outcome = run_report_sequence(&mut service, &environment.inputs).await;

    // La conexión se cierra tanto si la secuencia terminó bien como si no
    service.shutdown().await;

    match outcome {
        Ok(_) => {
            info!("👋 Reportes terminados");
            Ok(())
        }
        Err(e) => {
            error!("❌ Error en la ejecución principal: {}", e);
            Err(anyhow::anyhow!("Error de reportes: {}", e))
        }
    }
}
