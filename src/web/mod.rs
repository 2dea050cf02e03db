//! Presentation shell: server-rendered static pages.
//!
//! Renders a static header and greeting cards with Askama templates. Has no
//! coupling to the blog API; its only side effect is a logged fetch of a
//! third-party demo endpoint.

pub mod handlers;
pub mod routes;
