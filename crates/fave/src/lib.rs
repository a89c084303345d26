pub mod config;
pub mod events;

pub mod gui {
    pub mod app;
    pub mod button;
    pub mod delegate;
    pub mod theme;
}

pub mod sys {
    pub mod runtime;
    pub mod server;
}
