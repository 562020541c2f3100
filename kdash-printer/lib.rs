pub use self::describer::{ContentResponse, PluginListDescriber};
pub use self::errors::PrintError;
pub use self::object::{BoxedFuture, ItemDescriptor, Object};
pub use self::options::PrintOptions;
pub use self::pods::{POD_COLUMNS, PodStatus, create_pod_list_view, list_pods};
pub use self::printer::Printer;
pub use self::selectors::{print_selector, print_selector_map, selector_matches};

pub mod printers;

mod describer;
mod errors;
mod object;
mod options;
mod pods;
mod printer;
mod selectors;
mod utils;

#[cfg(test)]
mod testing;
