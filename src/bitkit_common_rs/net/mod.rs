//! ネットワーク関連ユーティリティ

pub mod net_util;

// 便利な再エクスポート
pub use net_util::{
    bytes_to_ipv4_str, get_mac_addr, ipv4_str_to_bytes, is_domain, is_dynamic_port,
    is_ipv4_bytes, is_ipv4_str, is_net_port, is_registered_port, is_well_known_port,
    parse_mac_addrs,
};
