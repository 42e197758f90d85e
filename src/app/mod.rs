pub mod actions;
pub mod debounce;
pub mod event_loop;
pub mod state;
pub mod update;
pub mod view;
pub mod widgets;
