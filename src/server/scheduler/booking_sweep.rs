use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::booking::BookingService};

/// Delay before the catch-up pass on startup, giving migrations a moment.
const STARTUP_SWEEP_DELAY_SECS: u64 = 5;

/// Starts the expired-booking sweep.
///
/// Runs hourly and completes every confirmed booking whose drop-off date has
/// passed, restoring the vehicle's availability and moving it to the drop-off
/// city. One catch-up pass runs shortly after startup so bookings that
/// expired while the service was down complete without waiting for the next
/// full hour.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();

    // Schedule job to run at the top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_sweep(&db).await {
                tracing::error!("Error completing expired bookings: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Expired booking sweep scheduler started");

    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(STARTUP_SWEEP_DELAY_SECS)).await;
        if let Err(e) = run_sweep(&db).await {
            tracing::error!("Error completing expired bookings at startup: {}", e);
        }
    });

    Ok(())
}

async fn run_sweep(db: &DatabaseConnection) -> Result<(), AppError> {
    let completed = BookingService::new(db).complete_expired(Utc::now()).await?;

    if completed > 0 {
        tracing::info!("Sweep completed {} expired booking(s)", completed);
    }

    Ok(())
}
