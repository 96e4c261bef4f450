mod home;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::QuizView;
#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
pub use state::ViewError;
