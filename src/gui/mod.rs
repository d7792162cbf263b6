mod app;

pub use app::SchedulerApp;
