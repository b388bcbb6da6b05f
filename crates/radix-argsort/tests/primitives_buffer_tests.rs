#![cfg(feature = "dev")]
//! Tests for the engine scratch buffers.
//!
//! These tests verify the invocation-local memory primitives:
//! - Borrowed versus owned key buffers
//! - Ping-pong order buffer roles, flips, and the final copy-back
//!
//! ## Test Organization
//!
//! 1. **Key Buffer** - borrow/own access
//! 2. **Ping-Pong** - role tracking and finish semantics

use radix_argsort::internals::primitives::buffer::{KeyBuf, Live, PingPong};

// ============================================================================
// Key Buffer Tests
// ============================================================================

/// Test slice access through both buffer variants.
#[test]
fn test_key_buf_variants() {
    let caller = [1_u32, 2, 3];

    let borrowed = KeyBuf::Borrowed(&caller);
    let owned = KeyBuf::Owned(vec![1, 2, 3]);

    assert_eq!(borrowed.as_slice(), owned.as_slice());
    assert_eq!(&borrowed[..], &[1, 2, 3], "Deref reaches the keys");
}

// ============================================================================
// Ping-Pong Tests
// ============================================================================

/// Test that the caller's buffer starts live.
#[test]
fn test_ping_pong_starts_on_caller() {
    let mut order = [0_usize, 1, 2];
    let buffers = PingPong::new(&mut order);

    assert_eq!(buffers.live(), Live::Caller);
    assert_eq!(buffers.live_slice(), &[0, 1, 2]);
}

/// Test source/destination roles across a flip.
#[test]
fn test_ping_pong_split_and_flip() {
    let mut order = [0_usize, 1, 2];
    let mut buffers = PingPong::new(&mut order);

    // First pass: caller is source, scratch is destination.
    {
        let (src, dst) = buffers.split();
        assert_eq!(src, &[0, 1, 2]);
        dst.copy_from_slice(&[2, 1, 0]);
    }
    buffers.flip();

    assert_eq!(buffers.live(), Live::Scratch);
    assert_eq!(buffers.live_slice(), &[2, 1, 0]);

    // Second pass: roles swap back.
    {
        let (src, dst) = buffers.split();
        assert_eq!(src, &[2, 1, 0]);
        dst.copy_from_slice(&[1, 2, 0]);
    }
    buffers.flip();

    assert_eq!(buffers.live(), Live::Caller);
    buffers.finish();
    assert_eq!(order, [1, 2, 0]);
}

/// Test that finishing on the scratch copies it back to the caller.
#[test]
fn test_ping_pong_finish_copies_back() {
    let mut order = [0_usize, 1, 2];
    {
        let mut buffers = PingPong::new(&mut order);
        let (_, dst) = buffers.split();
        dst.copy_from_slice(&[2, 0, 1]);
        buffers.flip();
        buffers.finish();
    }

    assert_eq!(order, [2, 0, 1]);
}

/// Test that finishing on the caller leaves the buffer untouched.
#[test]
fn test_ping_pong_finish_noop_on_caller() {
    let mut order = [4_usize, 5, 6];
    {
        let buffers = PingPong::new(&mut order);
        buffers.finish();
    }

    assert_eq!(order, [4, 5, 6]);
}
