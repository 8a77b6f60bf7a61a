mod dns;
mod tcp;
mod http;
mod clock;
mod renderer;
mod io;
mod announcer;

pub use dns::DnsResolver;
pub use tcp::{TcpDialer, TcpConnection};
pub use http::HttpClient;
pub use clock::Clock;
pub use renderer::Renderer;
pub use io::{IoStream, BoxedIoStream};
pub use announcer::Announcer;
