mod root;

pub use root::DashboardApp;
