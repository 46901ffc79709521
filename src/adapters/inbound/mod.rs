/// Inbound adapters - drive the application from the command line
mod command_router;

pub use command_router::CommandRouter;
