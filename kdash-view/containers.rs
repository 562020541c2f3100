use serde::Serialize;

/// Single container name and image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerDef {
    pub name: String,
    pub image: String,
}

/// List of containers from a pod template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Containers {
    pub containers: Vec<ContainerDef>,
}

impl Containers {
    /// Creates new empty [`Containers`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds container to the list.
    pub fn add(&mut self, name: impl Into<String>, image: impl Into<String>) {
        self.containers.push(ContainerDef {
            name: name.into(),
            image: image.into(),
        });
    }
}
