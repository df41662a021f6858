// Resume rendering: a deterministic, self-contained HTML document sized for
// one printed page. Pure and synchronous; no I/O.

pub mod escape;
pub mod handlers;
pub mod template;

pub use template::render_resume;
