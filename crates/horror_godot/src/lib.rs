use godot::prelude::*;

mod adapters;
mod character;
mod convert;
mod logger;

/// GDExtension entry point
struct HorrorExtension;

#[gdextension]
unsafe impl ExtensionLibrary for HorrorExtension {}
