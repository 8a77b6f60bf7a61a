mod dns;
mod tcp;
mod http;
mod clock;
mod renderer;
mod announcer;

pub use dns::HickoryDnsResolver;
pub use tcp::TokioTcpDialer;
pub use http::{Http10Client, request_text};
pub use clock::TokioClock;
pub use renderer::{TextRenderer, JsonRenderer, write_response};
pub use announcer::WriteAnnouncer;
