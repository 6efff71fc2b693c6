//! Built-in example plugins
//!
//! Each module exports a `plugin()` constructor returning the
//! [`PluginDescriptor`] the host registers. Plugins only ever touch the
//! outside world through their invocation [`Context`].
//!
//! [`PluginDescriptor`]: crate::domain::entities::PluginDescriptor
//! [`Context`]: crate::application::context::Context

pub mod lyrics;
pub mod ping;
pub mod sticker;
pub mod weather;

use once_cell::sync::Lazy;
use reqwest::Client;

use crate::domain::entities::PluginDescriptor;

/// Shared HTTP client for plugins that call remote services
pub(crate) static HTTP: Lazy<Client> = Lazy::new(Client::new);

/// The full built-in plugin set, in registration order.
pub fn default_plugins() -> Vec<PluginDescriptor> {
    vec![
        ping::plugin(),
        weather::plugin(),
        lyrics::plugin(),
        sticker::plugin(),
    ]
}
