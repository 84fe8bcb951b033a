pub mod analytics;
pub mod cli;
pub mod creation;
pub mod ext;
pub mod form;
pub mod model;
pub mod normalize;
pub mod sanitize;
pub mod settings;
pub mod util;
