// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the front end to the unispace backend crates.
//
// Each service wraps one or more backend crate APIs and reports failures both
// as an error value and as a user-facing message on the session.

pub mod app_services;
pub mod data_dir;
