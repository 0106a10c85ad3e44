//! Tree-drawing build progress
//!
//! A `BuildObserver` that renders the build as an indented tree, one line
//! per node: internal nodes show their probe word, leaves a solid block.
//! Purely cosmetic; the builder never prints on its own.
//!
//! ```text
//! root
//! └───?
//!     ├───carts
//!     │   └───█
//!     └───cable
//!         ├───█
//!         └───█
//! ```

use crate::core::Pattern;
use crate::tree::BuildObserver;

/// Draws the build progress to stdout
pub struct TreePrinter {
    /// `last`-sibling flag per ancestor, for connector/indent choice
    stack: Vec<bool>,
    started: bool,
}

impl TreePrinter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            started: false,
        }
    }

    /// The root has no incoming branch; print its header once
    fn connect_root(&mut self) {
        if !self.started {
            self.started = true;
            println!("root");
            print!("└───");
            self.stack.push(true);
        }
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildObserver for TreePrinter {
    fn on_internal(&mut self, probe: &str) {
        self.connect_root();
        // The root asks no word; it implicitly asks for the length
        if probe.is_empty() {
            println!("?");
        } else {
            println!("{probe}");
        }
    }

    fn on_leaf(&mut self, _candidates: usize) {
        self.connect_root();
        println!("█");
    }

    fn on_degenerate(&mut self, _probe: &str) {
        // Messages would corrupt the drawing mid-line; degenerate splits
        // are visible as single-branch nodes anyway.
    }

    fn on_descend(&mut self, _response: &Pattern, last: bool) {
        for &ancestor_last in &self.stack {
            print!("{}", if ancestor_last { "    " } else { "│   " });
        }
        print!("{}", if last { "└───" } else { "├───" });
        self.stack.push(last);
    }

    fn on_ascend(&mut self) {
        self.stack.pop();
    }
}
