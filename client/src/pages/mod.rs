//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has one route. `home` owns the session orchestration and delegates
//! rendering details to `components`.

pub mod home;
