//! Bridge master codec.
//!
//! Maps [`BridgeConfig`] to and from the `IFLA_BR_*` attribute stream
//! carried under the bridge link kind's info data.

use linkcfg_netlink::{rtnl, AttrDecoder, AttrEncoder, AttrResult};
use linkcfg_types::BridgeConfig;
use tracing::trace;

use crate::LinkCodec;

impl LinkCodec for BridgeConfig {
    /// Emits the full record.
    ///
    /// `IFLA_BR_VLAN_DEFAULT_PVID` rides along only while VLAN filtering
    /// is enabled; a PVID has no meaning on a non-filtering bridge.
    fn encode(&self) -> AttrResult<Vec<u8>> {
        let mut enc = AttrEncoder::new();

        enc.put_u32(rtnl::IFLA_BR_STP_STATE, u32::from(self.stp_enabled));
        enc.put_u8(
            rtnl::IFLA_BR_VLAN_FILTERING,
            u8::from(self.vlan_filtering_enabled),
        );
        if self.vlan_filtering_enabled {
            enc.put_u16(rtnl::IFLA_BR_VLAN_DEFAULT_PVID, self.vlan_default_pvid);
        }
        enc.put_u8(
            rtnl::IFLA_BR_VLAN_STATS_ENABLED,
            u8::from(self.vlan_stats_enabled),
        );
        enc.put_u8(
            rtnl::IFLA_BR_VLAN_STATS_PER_PORT,
            u8::from(self.vlan_stats_per_port),
        );

        enc.finish()
    }

    /// Applies every recognized attribute in `data` to the record.
    ///
    /// Attributes absent from the stream leave their fields untouched, so
    /// a partial kernel reply only narrows what changes.
    fn decode(&mut self, data: &[u8]) -> AttrResult<()> {
        let mut dec = AttrDecoder::new(data)?;

        while dec.advance() {
            match dec.kind() {
                // Exactly 1 means enabled; the kernel writes only 0 or 1
                // here, so any other value reads back as disabled. Confirm
                // against the bridge netlink contract before loosening
                // this to != 0.
                rtnl::IFLA_BR_STP_STATE => self.stp_enabled = dec.get_u32() == 1,
                rtnl::IFLA_BR_VLAN_FILTERING => {
                    self.vlan_filtering_enabled = dec.get_u8() == 1;
                }
                rtnl::IFLA_BR_VLAN_DEFAULT_PVID => {
                    self.vlan_default_pvid = dec.get_u16();
                }
                rtnl::IFLA_BR_VLAN_STATS_ENABLED => {
                    self.vlan_stats_enabled = dec.get_u8() == 1;
                }
                rtnl::IFLA_BR_VLAN_STATS_PER_PORT => {
                    self.vlan_stats_per_port = dec.get_u8() == 1;
                }
                other => trace!(code = other, "skipping unrecognized bridge attribute"),
            }
        }

        dec.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect_kinds(stream: &[u8]) -> Vec<u16> {
        let mut dec = AttrDecoder::new(stream).unwrap();
        let mut kinds = Vec::new();
        while dec.advance() {
            kinds.push(dec.kind());
        }
        kinds
    }

    #[test]
    fn test_round_trip_full_record() {
        let original = BridgeConfig {
            stp_enabled: true,
            vlan_filtering_enabled: true,
            vlan_default_pvid: 42,
            vlan_stats_enabled: false,
            vlan_stats_per_port: true,
        };

        let stream = original.encode().unwrap();
        let mut decoded = BridgeConfig::default();
        decoded.decode(&stream).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_emission_order() {
        let config = BridgeConfig {
            vlan_filtering_enabled: true,
            vlan_default_pvid: 100,
            ..Default::default()
        };

        let kinds = collect_kinds(&config.encode().unwrap());
        assert_eq!(
            kinds,
            vec![
                rtnl::IFLA_BR_STP_STATE,
                rtnl::IFLA_BR_VLAN_FILTERING,
                rtnl::IFLA_BR_VLAN_DEFAULT_PVID,
                rtnl::IFLA_BR_VLAN_STATS_ENABLED,
                rtnl::IFLA_BR_VLAN_STATS_PER_PORT,
            ]
        );
    }

    #[test]
    fn test_encode_omits_pvid_without_filtering() {
        let config = BridgeConfig {
            vlan_filtering_enabled: false,
            vlan_default_pvid: 100,
            ..Default::default()
        };

        let kinds = collect_kinds(&config.encode().unwrap());
        assert!(!kinds.contains(&rtnl::IFLA_BR_VLAN_DEFAULT_PVID));
        assert_eq!(kinds.len(), 4);
    }

    #[test]
    fn test_decode_absent_pvid_keeps_prior_value() {
        let config = BridgeConfig {
            vlan_filtering_enabled: false,
            ..Default::default()
        };
        let stream = config.encode().unwrap();

        let mut target = BridgeConfig {
            vlan_default_pvid: 7,
            ..Default::default()
        };
        target.decode(&stream).unwrap();
        assert_eq!(target.vlan_default_pvid, 7);
    }

    #[test]
    fn test_decode_treats_two_as_disabled() {
        let mut enc = AttrEncoder::new();
        enc.put_u32(rtnl::IFLA_BR_STP_STATE, 2);
        let stream = enc.finish().unwrap();

        let mut config = BridgeConfig {
            stp_enabled: true,
            ..Default::default()
        };
        config.decode(&stream).unwrap();
        assert!(!config.stp_enabled);
    }

    #[test]
    fn test_decode_skips_unknown_attributes() {
        let mut enc = AttrEncoder::new();
        enc.put_u32(rtnl::IFLA_BR_STP_STATE, 1);
        enc.put_bytes(200, &[0xde, 0xad]);
        enc.put_u8(rtnl::IFLA_BR_VLAN_STATS_ENABLED, 1);
        let stream = enc.finish().unwrap();

        let mut config = BridgeConfig::default();
        config.decode(&stream).unwrap();
        assert!(config.stp_enabled);
        assert!(config.vlan_stats_enabled);
    }

    #[test]
    fn test_decode_rejects_truncated_stream() {
        // Declares a 4-byte STP value but carries only 2 bytes of it.
        let mut buf = Vec::new();
        buf.extend_from_slice(&8u16.to_ne_bytes());
        buf.extend_from_slice(&rtnl::IFLA_BR_STP_STATE.to_ne_bytes());
        buf.extend_from_slice(&[1, 0]);

        let mut config = BridgeConfig::default();
        let err = config.decode(&buf).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_decode_width_mismatch_is_deferred_and_partial() {
        // STP encoded two bytes wide; the stats attribute after it is fine.
        let mut enc = AttrEncoder::new();
        enc.put_u16(rtnl::IFLA_BR_STP_STATE, 1);
        enc.put_u8(rtnl::IFLA_BR_VLAN_STATS_ENABLED, 1);
        let stream = enc.finish().unwrap();

        let mut config = BridgeConfig::default();
        let err = config.decode(&stream).unwrap_err();
        assert!(err.is_malformed());
        // The loop still visited the later attribute.
        assert!(config.vlan_stats_enabled);
        assert!(!config.stp_enabled);
    }

    #[test]
    fn test_decode_duplicate_attribute_last_wins() {
        let mut enc = AttrEncoder::new();
        enc.put_u8(rtnl::IFLA_BR_VLAN_FILTERING, 1);
        enc.put_u8(rtnl::IFLA_BR_VLAN_FILTERING, 0);
        let stream = enc.finish().unwrap();

        let mut config = BridgeConfig::default();
        config.decode(&stream).unwrap();
        assert!(!config.vlan_filtering_enabled);
    }
}
