/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated
/// modules, so access control is applied explicitly at the module level
/// (via Axum layers) and a protected endpoint cannot be exposed by accident.
///
/// The two modules map directly to the two access levels the portal has.

/// Routes accessible to any client: the health probe and the login/logout
/// pair that opens and closes a session.
pub mod public;

/// Routes protected by the session gate: every request must carry a session
/// whose `user` field is truthy, or it is rejected with 401 before the
/// handler runs.
pub mod authenticated;
