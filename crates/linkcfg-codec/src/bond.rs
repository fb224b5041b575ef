//! Bond master codec.
//!
//! Maps [`BondConfig`] to and from the `IFLA_BOND_*` attribute stream
//! carried under the bond link kind's info data.

use linkcfg_netlink::{rtnl, AttrDecoder, AttrEncoder, AttrResult};
use linkcfg_types::{BondConfig, BondMode, LacpRate, XmitHashPolicy};
use tracing::trace;

use crate::LinkCodec;

impl LinkCodec for BondConfig {
    /// Emits the record with its mode guards applied.
    ///
    /// `updelay`/`downdelay` ride along only while MII monitoring is
    /// active, `lacp_rate` only in 802.3ad mode (the kernel rejects it
    /// elsewhere), and the transmit hash policy only for the modes that
    /// hash.
    fn encode(&self) -> AttrResult<Vec<u8>> {
        let mut enc = AttrEncoder::new();

        enc.put_u8(rtnl::IFLA_BOND_MODE, self.mode.as_kernel());
        enc.put_u32(rtnl::IFLA_BOND_MIIMON, self.miimon);
        if self.miimon != 0 {
            enc.put_u32(rtnl::IFLA_BOND_UPDELAY, self.updelay);
            enc.put_u32(rtnl::IFLA_BOND_DOWNDELAY, self.downdelay);
        }
        enc.put_u8(rtnl::IFLA_BOND_USE_CARRIER, u8::from(self.use_carrier));
        if self.mode.uses_xmit_hash() {
            enc.put_u8(
                rtnl::IFLA_BOND_XMIT_HASH_POLICY,
                self.xmit_hash_policy.as_kernel(),
            );
        }
        if self.mode.is_lacp() {
            enc.put_u8(rtnl::IFLA_BOND_AD_LACP_RATE, self.lacp_rate.as_kernel());
        }

        enc.finish()
    }

    /// Applies every recognized attribute in `data` to the record.
    ///
    /// Enum values the record cannot represent leave the prior field
    /// value in place rather than failing the decode.
    fn decode(&mut self, data: &[u8]) -> AttrResult<()> {
        let mut dec = AttrDecoder::new(data)?;

        while dec.advance() {
            match dec.kind() {
                rtnl::IFLA_BOND_MODE => {
                    let value = dec.get_u8();
                    match BondMode::from_kernel(value) {
                        Some(mode) => self.mode = mode,
                        None => trace!(value, "keeping prior bond mode"),
                    }
                }
                rtnl::IFLA_BOND_MIIMON => self.miimon = dec.get_u32(),
                rtnl::IFLA_BOND_UPDELAY => self.updelay = dec.get_u32(),
                rtnl::IFLA_BOND_DOWNDELAY => self.downdelay = dec.get_u32(),
                rtnl::IFLA_BOND_USE_CARRIER => self.use_carrier = dec.get_u8() == 1,
                rtnl::IFLA_BOND_XMIT_HASH_POLICY => {
                    let value = dec.get_u8();
                    match XmitHashPolicy::from_kernel(value) {
                        Some(policy) => self.xmit_hash_policy = policy,
                        None => trace!(value, "keeping prior transmit hash policy"),
                    }
                }
                rtnl::IFLA_BOND_AD_LACP_RATE => {
                    let value = dec.get_u8();
                    match LacpRate::from_kernel(value) {
                        Some(rate) => self.lacp_rate = rate,
                        None => trace!(value, "keeping prior LACP rate"),
                    }
                }
                other => trace!(code = other, "skipping unrecognized bond attribute"),
            }
        }

        dec.finish()
    }
}
