//! VLAN link codec.
//!
//! Maps [`VlanLinkConfig`] to and from the `IFLA_VLAN_*` attribute
//! stream of an 802.1Q/802.1ad sub-interface.

use linkcfg_netlink::{rtnl, AttrDecoder, AttrEncoder, AttrResult};
use linkcfg_types::{VlanId, VlanLinkConfig, VlanProtocol};
use tracing::trace;

use crate::LinkCodec;

impl LinkCodec for VlanLinkConfig {
    fn encode(&self) -> AttrResult<Vec<u8>> {
        let mut enc = AttrEncoder::new();

        enc.put_u16(rtnl::IFLA_VLAN_ID, self.vlan_id.as_u16());
        // The encapsulation ethertype travels in network byte order.
        enc.put_u16(rtnl::IFLA_VLAN_PROTOCOL, self.protocol.ethertype().to_be());

        enc.finish()
    }

    /// Applies every recognized attribute in `data` to the record.
    ///
    /// Values that do not map onto the record (an out-of-range VLAN ID,
    /// an ethertype that is not a VLAN tag) leave the prior field value
    /// in place rather than failing the decode.
    fn decode(&mut self, data: &[u8]) -> AttrResult<()> {
        let mut dec = AttrDecoder::new(data)?;

        while dec.advance() {
            match dec.kind() {
                rtnl::IFLA_VLAN_ID => match VlanId::new(dec.get_u16()) {
                    Ok(id) => self.vlan_id = id,
                    Err(err) => trace!(%err, "keeping prior VLAN ID"),
                },
                rtnl::IFLA_VLAN_PROTOCOL => {
                    let ethertype = u16::from_be(dec.get_u16());
                    match VlanProtocol::from_ethertype(ethertype) {
                        Some(protocol) => self.protocol = protocol,
                        None => trace!(ethertype, "keeping prior VLAN protocol"),
                    }
                }
                other => trace!(code = other, "skipping unrecognized VLAN attribute"),
            }
        }

        dec.finish()
    }
}
