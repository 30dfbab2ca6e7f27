// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on the ORDER feature selection.
//!
//! This enables cleaner conditional compilation in code and tests:
//! - `#[cfg(order_default_none)]` when triples are left in generation order
//! - `#[cfg(order_default_z)]` when triples are sorted by hypotenuse
//! - `#[cfg(order_default_lex)]` for the default lexicographic (x, y, z) case

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(order_default_none)");
    println!("cargo:rustc-check-cfg=cfg(order_default_z)");
    println!("cargo:rustc-check-cfg=cfg(order_default_lex)");

    // order_none wins if both are given
    #[cfg(feature = "order_none")]
    println!("cargo:rustc-cfg=order_default_none");

    #[cfg(all(feature = "order_by_z", not(feature = "order_none")))]
    println!("cargo:rustc-cfg=order_default_z");

    #[cfg(not(any(feature = "order_none", feature = "order_by_z")))]
    println!("cargo:rustc-cfg=order_default_lex");
}
