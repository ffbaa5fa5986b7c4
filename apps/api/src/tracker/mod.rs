// Job application tracker: CRUD + live collection snapshots for jobs,
// email logs, interview notes, and company research.

pub mod crud;
pub mod handlers;
