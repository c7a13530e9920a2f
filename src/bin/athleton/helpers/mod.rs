// ABOUTME: Helper modules for the athleton CLI
// ABOUTME: Provides terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AthletON

pub mod display;
