use super::CommandSpec;

/// Static declaration of a plugin: metadata plus the commands it contributes.
///
/// Built once at startup and handed to the command service; the host only
/// ever sees this type, never a plugin's internals.
#[derive(Clone)]
pub struct PluginDescriptor {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub commands: Vec<CommandSpec>,
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: "0.1.0".to_string(),
            author: String::new(),
            commands: Vec::new(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }
}
