//! Managed entry point: the embassy executor owns the loop.
//!
//! [`ExecutorScheduler`] spawns one task per registered app. The task calls
//! `setup` once, then `body` forever, yielding to the executor after every
//! iteration so other tasks keep running.

use embassy_executor::{SpawnError, Spawner};
use embassy_futures::yield_now;

use portable::{App, Scheduler};

pub struct ExecutorScheduler {
    spawner: Spawner,
}

impl ExecutorScheduler {
    pub fn new(spawner: Spawner) -> Self {
        ExecutorScheduler { spawner }
    }
}

impl Scheduler for ExecutorScheduler {
    type Error = SpawnError;

    fn register(&mut self, app: &'static mut dyn App) -> Result<(), SpawnError> {
        self.spawner.spawn(app_task(app))
    }
}

#[embassy_executor::task]
async fn app_task(app: &'static mut dyn App) {
    app.setup();
    defmt::info!("app setup done");

    loop {
        app.body();
        yield_now().await;
    }
}
