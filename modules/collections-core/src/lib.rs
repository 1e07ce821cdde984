//! Singly linked LIFO and FIFO containers sharing one chain interface.
//!
//! The crate is `no_std`; node storage is allocated through `alloc`.

#![no_std]

extern crate alloc;

pub mod collections;
