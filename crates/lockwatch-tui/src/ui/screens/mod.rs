mod home;

pub use home::HomeScreen;
