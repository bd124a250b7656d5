//! Client-side behavior for the DREN Betsiboka website.
//!
//! The state machines and data model live in host-independent modules so they
//! can be driven with a virtual clock in tests; `browser` binds them to the DOM
//! and `components`/`pages` render the site with Yew.

pub mod config;
pub mod error;
pub mod scheduler;
pub mod reveal;
pub mod counter;
pub mod effects;
pub mod notification;
pub mod app;

pub mod stats {
    pub mod dataset;
    pub mod chart;
    pub mod simulation;
    pub mod export;
    pub mod analytics;
    pub mod renderer;
}

pub mod browser {
    pub mod dom;
    pub mod timers;
    pub mod observer;
    pub mod reveal_sink;
    pub mod download;
}

pub mod components {
    pub mod notification;
    pub mod reveal;
    pub mod charts;
    pub mod statistics;
    pub mod analytics_modal;
    pub mod counters;
    pub mod cards;
    pub mod hero;
}

pub mod pages {
    pub mod home;
}

pub use error::SiteError;
