// Resume management: CRUD, AI summarization, and template rendering.

pub mod handlers;
