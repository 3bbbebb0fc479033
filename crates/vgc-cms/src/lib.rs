//! VGC CMS
//!
//! Content layer for the VGC Consulting website.
//!
//! # Overview
//!
//! All page content lives in a remote CMS. This crate:
//!
//! - Fetches pages and site settings over HTTP ([`CmsClient`]), with
//!   timeouts and TTL caching
//! - Models the CMS payloads leniently ([`Page`], [`Block`], [`Settings`])
//! - Shapes block data into page view models ([`views`]) using a shared set
//!   of helpers for HTML fragments, media URLs, dates and navigation
//!
//! The HTTP server lives in `vgc-site`; nothing here knows about templates.

pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod html;
pub mod media;
pub mod model;
pub mod routing;
pub mod views;


pub use client::{CmsClient, ContactSubmission};
pub use config::{CachePolicy, CmsConfig};
pub use error::{CmsError, CmsResult};
pub use media::MediaResolver;
pub use model::{Block, Page, PageSet, Settings, ValueExt};
