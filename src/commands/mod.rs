// Copyright (c) 2025 Soles contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod apps;
pub mod transactions;
pub mod parse;
pub mod stats;
pub mod exporter;
pub mod doctor;
