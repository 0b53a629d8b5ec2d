//! Live behavior for mounted optbox widgets.
//!
//! The binder talks to the page only through the [`Host`] capability trait.
//! [`MemoryDom`] implements it in memory, so rendering, mounting and user
//! interaction can run together in plain unit tests:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use optbox_bind::{bind_multi_choice, BindOptions, Host, MemoryDom};
//! use optbox_core::{ids, render_multi_choice, ChoiceOption, ContainerBase, MultiChoiceConfig};
//!
//! let config = MultiChoiceConfig::new(ContainerBase::new("opts", "opts", "Options"))
//!     .option(ChoiceOption::new("a", "A"))
//!     .value("a", false);
//!
//! let dom = MemoryDom::new();
//! dom.mount(&render_multi_choice(&config));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = seen.clone();
//! bind_multi_choice(&dom, "opts", move |v| sink.borrow_mut().push(v.clone()), BindOptions::default());
//!
//! dom.click(dom.find(&ids::control("opts", "a")).unwrap());
//! assert_eq!(seen.borrow().len(), 1);
//! assert_eq!(dom.text(dom.find(&ids::summary("opts")).unwrap()), "1 item selected");
//! ```

pub mod binder;
pub mod host;
pub mod memory;
pub mod selector;

pub use binder::{
    bind_exclusive_choice, bind_grid_choice, bind_multi_choice, bind_text_block, bind_value_card,
    set_text_block_value, text_block_value, BindOptions, TextBlockHooks,
};
pub use host::{listener, Event, EventKind, Host, Listener, NodeHandle};
pub use memory::MemoryDom;
pub use selector::{Selector, SelectorTarget};
