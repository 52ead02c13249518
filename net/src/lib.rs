// Copyright 2024 The Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License. You may obtain a copy of
// the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations under
// the License.

//! IPv4/IPv6 address parsing, endpoints, and minimal blocking TCP/UDP
//! socket wrappers, all rendering through [`fmt`]'s user-defined
//! formatter rather than [`std::fmt`].
//!
//! This crate does not implement a poll-based socket service monitoring
//! many sockets at once; [`service::SocketService`] accepts one connection
//! at a time and dispatches it to a [`task::TaskManager`] worker.

#![deny(missing_docs)]

pub mod endpoint;
pub mod ipv4;
pub mod ipv6;
pub mod listener;
pub mod service;
pub mod socket;
pub mod tcp;
pub mod udp;

pub use endpoint::{Address, Endpoint, PortType};
pub use ipv4::IPv4Address;
pub use ipv6::IPv6Address;
pub use listener::ListenSocket;
pub use service::{ConnectionHandler, SocketService};
pub use socket::{BindMode, ConnectedState, IOMode};
pub use tcp::TcpSocket;
pub use udp::UdpSocket;
