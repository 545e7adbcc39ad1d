//! Typed payload records and bit-level helpers.

use crate::constants::*;
use crate::frame::Direction;

/// A node id in the mesh network (1..=232).
pub type NodeId = u8;

/// Returns true if bit `bit` (0 = least significant) of `byte` is set.
pub fn bit_is_set(byte: u8, bit: u8) -> bool {
    bit < 8 && byte & (1 << bit) != 0
}

/// Extract `width` bits of `byte` starting at bit `shift`.
///
/// Bits past the top of the byte read as zero.
pub fn bit_field(byte: u8, shift: u8, width: u8) -> u8 {
    if shift >= 8 {
        return 0;
    }
    (byte >> shift) & ((1u16 << width.min(8)) - 1) as u8
}

/// Node id denoted by bit `bit` of mask byte `byte_index`, or `None` if that
/// position does not fit in a [`NodeId`].
pub fn mask_node_id(byte_index: usize, bit: u8) -> Option<NodeId> {
    if bit >= 8 {
        return None;
    }
    NodeId::try_from(byte_index * 8 + bit as usize + 1).ok()
}

// ============================================================================
// Node Mask
// ============================================================================

/// A 29-byte node presence bitmap. Bit `i` of byte `j` denotes node `j*8+i+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeMask(pub [u8; NODE_MASK_SIZE]);

impl NodeMask {
    /// Create from a slice. Returns None if the slice is too short.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() >= NODE_MASK_SIZE {
            let mut bytes = [0u8; NODE_MASK_SIZE];
            bytes.copy_from_slice(&slice[..NODE_MASK_SIZE]);
            Some(NodeMask(bytes))
        } else {
            None
        }
    }

    /// Returns true if `node_id` is set in the mask.
    pub fn contains(&self, node_id: NodeId) -> bool {
        if node_id == 0 {
            return false;
        }
        let index = (node_id - 1) as usize;
        index / 8 < NODE_MASK_SIZE && bit_is_set(self.0[index / 8], (index % 8) as u8)
    }

    /// All node ids present in the mask, in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(byte_index, &byte)| {
                (0..8u8)
                    .filter(move |&bit| bit_is_set(byte, bit))
                    .filter_map(move |bit| mask_node_id(byte_index, bit))
            })
            .collect()
    }

    /// Number of nodes present.
    pub fn len(&self) -> usize {
        self.0.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns true if no node is present.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; NODE_MASK_SIZE] {
        &self.0
    }
}

impl Default for NodeMask {
    fn default() -> Self {
        NodeMask([0u8; NODE_MASK_SIZE])
    }
}

// ============================================================================
// Version
// ============================================================================

/// Z-Wave library flavour running on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryType {
    /// Static controller.
    StaticController,
    /// Portable controller.
    Controller,
    /// Enhanced slave.
    EnhancedSlave,
    /// Slave.
    Slave,
    /// Installer.
    Installer,
    /// Routing slave.
    RoutingSlave,
    /// Bridge controller.
    BridgeController,
    /// Device under test.
    DeviceUnderTest,
    /// Unknown library code.
    Unknown(u8),
}

impl From<u8> for LibraryType {
    fn from(code: u8) -> Self {
        match code {
            LIBRARY_STATIC_CONTROLLER => LibraryType::StaticController,
            LIBRARY_CONTROLLER => LibraryType::Controller,
            LIBRARY_ENHANCED_SLAVE => LibraryType::EnhancedSlave,
            LIBRARY_SLAVE => LibraryType::Slave,
            LIBRARY_INSTALLER => LibraryType::Installer,
            LIBRARY_ROUTING_SLAVE => LibraryType::RoutingSlave,
            LIBRARY_BRIDGE_CONTROLLER => LibraryType::BridgeController,
            LIBRARY_DEVICE_UNDER_TEST => LibraryType::DeviceUnderTest,
            _ => LibraryType::Unknown(code),
        }
    }
}

impl From<LibraryType> for u8 {
    fn from(library: LibraryType) -> Self {
        match library {
            LibraryType::StaticController => LIBRARY_STATIC_CONTROLLER,
            LibraryType::Controller => LIBRARY_CONTROLLER,
            LibraryType::EnhancedSlave => LIBRARY_ENHANCED_SLAVE,
            LibraryType::Slave => LIBRARY_SLAVE,
            LibraryType::Installer => LIBRARY_INSTALLER,
            LibraryType::RoutingSlave => LIBRARY_ROUTING_SLAVE,
            LibraryType::BridgeController => LIBRARY_BRIDGE_CONTROLLER,
            LibraryType::DeviceUnderTest => LIBRARY_DEVICE_UNDER_TEST,
            LibraryType::Unknown(code) => code,
        }
    }
}

/// Library version returned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Fixed-width version text, kept verbatim (including the NUL terminator).
    pub library_version: String,
    /// Library type.
    pub library_type: LibraryType,
}

impl VersionInfo {
    /// Version text up to the first NUL.
    pub fn version_text(&self) -> &str {
        self.library_version
            .split('\0')
            .next()
            .unwrap_or(&self.library_version)
    }
}

// ============================================================================
// Init Data
// ============================================================================

/// Serial API init data: API capabilities and the nodes in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    /// Serial API version.
    pub api_version: u8,
    /// Raw capability byte.
    pub capabilities: u8,
    /// Nodes present in the network.
    pub node_mask: NodeMask,
    /// Transceiver chip type.
    pub chip_type: u8,
    /// Transceiver chip version.
    pub chip_version: u8,
}

impl InitData {
    /// Present node ids in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.node_mask.node_ids()
    }

    /// The controller runs the slave API.
    pub fn is_slave_api(&self) -> bool {
        bit_is_set(self.capabilities, 0)
    }

    /// Timer functions are supported.
    pub fn has_timer_functions(&self) -> bool {
        bit_is_set(self.capabilities, 1)
    }

    /// The controller is a secondary controller.
    pub fn is_secondary_controller(&self) -> bool {
        bit_is_set(self.capabilities, 2)
    }

    /// The controller is the SIS.
    pub fn is_sis(&self) -> bool {
        bit_is_set(self.capabilities, 3)
    }
}

// ============================================================================
// Node Protocol Info
// ============================================================================

/// Maximum radio data rate of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    /// 9.6 kbit/s.
    Baud9600,
    /// 40 kbit/s.
    Baud40000,
    /// 100 kbit/s.
    Baud100000,
}

impl BaudRate {
    /// Decode the baud tier field of the capability byte.
    pub fn from_tier(tier: u8) -> Self {
        match tier {
            0b010 => BaudRate::Baud40000,
            _ => BaudRate::Baud9600,
        }
    }

    /// Rate in bits per second.
    pub fn bits_per_second(&self) -> u32 {
        match self {
            BaudRate::Baud9600 => 9600,
            BaudRate::Baud40000 => 40000,
            BaudRate::Baud100000 => 100000,
        }
    }
}

/// Protocol capabilities of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeProtocolInfo {
    /// Raw capability byte.
    pub capability: u8,
    /// Raw security byte.
    pub security: u8,
    /// Raw reserved/speed-extension byte.
    pub reserved: u8,
    /// Basic device class.
    pub basic_device_class: u8,
    /// Generic device class.
    pub generic_device_class: u8,
    /// Specific device class.
    pub specific_device_class: u8,
}

impl NodeProtocolInfo {
    /// Node is always listening.
    pub fn is_listening(&self) -> bool {
        bit_is_set(self.capability, 7)
    }

    /// Node takes part in routing.
    pub fn is_routing(&self) -> bool {
        bit_is_set(self.capability, 6)
    }

    /// Maximum supported data rate.
    pub fn max_baud_rate(&self) -> BaudRate {
        if bit_is_set(self.reserved, 0) {
            BaudRate::Baud100000
        } else {
            BaudRate::from_tier(bit_field(self.capability, 3, 3))
        }
    }

    /// Z-Wave protocol version.
    pub fn version(&self) -> u8 {
        bit_field(self.capability, 0, 3) + 1
    }

    /// Node supports optional functionality.
    pub fn has_optional_functionality(&self) -> bool {
        bit_is_set(self.security, 7)
    }

    /// Node is a 1000 ms frequently listening node.
    pub fn is_frequent_listening_1000ms(&self) -> bool {
        bit_is_set(self.security, 6)
    }

    /// Node is a 250 ms frequently listening node.
    pub fn is_frequent_listening_250ms(&self) -> bool {
        bit_is_set(self.security, 5)
    }

    /// Node can be woken by a beam.
    pub fn is_beaming(&self) -> bool {
        bit_is_set(self.security, 4)
    }

    /// Node is a routing slave.
    pub fn is_routing_slave(&self) -> bool {
        bit_is_set(self.security, 3)
    }

    /// Node reports a specific device class.
    pub fn has_specific_device(&self) -> bool {
        bit_is_set(self.security, 2)
    }

    /// Node is a controller.
    pub fn is_controller(&self) -> bool {
        bit_is_set(self.security, 1)
    }

    /// Node supports security.
    pub fn has_security(&self) -> bool {
        bit_is_set(self.security, 0)
    }
}

// ============================================================================
// Send Data
// ============================================================================

/// Delivery status reported in a send-data callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitStatus {
    /// Delivered and acknowledged.
    Ok,
    /// Sent, no acknowledgement.
    NoAck,
    /// Transmission failed.
    Fail,
    /// Routing layer busy.
    RoutingNotIdle,
    /// No route to destination.
    NoRoute,
    /// Unknown status code.
    Unknown(u8),
}

impl From<u8> for TransmitStatus {
    fn from(code: u8) -> Self {
        match code {
            TRANSMIT_COMPLETE_OK => TransmitStatus::Ok,
            TRANSMIT_COMPLETE_NO_ACK => TransmitStatus::NoAck,
            TRANSMIT_COMPLETE_FAIL => TransmitStatus::Fail,
            TRANSMIT_ROUTING_NOT_IDLE => TransmitStatus::RoutingNotIdle,
            TRANSMIT_COMPLETE_NO_ROUTE => TransmitStatus::NoRoute,
            _ => TransmitStatus::Unknown(code),
        }
    }
}

impl TransmitStatus {
    /// Returns true if the frame was delivered.
    pub fn is_ok(&self) -> bool {
        matches!(self, TransmitStatus::Ok)
    }
}

/// Send-data result. A response carries the return value only; a callback
/// request carries the callback id and delivery status only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendData {
    /// Direction of the frame this was decoded from.
    pub direction: Direction,
    /// Immediate accept/reject value (responses only).
    pub return_value: Option<u8>,
    /// Callback id (requests only).
    pub callback_id: Option<u8>,
    /// Delivery status (requests only).
    pub transmit_status: Option<TransmitStatus>,
    /// Transmit report bytes following the status, undecoded.
    pub transmit_report: Vec<u8>,
}

impl SendData {
    /// Returns true if a return value is present.
    pub fn has_return_value(&self) -> bool {
        self.return_value.is_some()
    }

    /// Returns true if a callback id is present.
    pub fn has_callback_id(&self) -> bool {
        self.callback_id.is_some()
    }
}

// ============================================================================
// Application Update
// ============================================================================

/// Status of an application update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationUpdateState {
    /// Node information frame received.
    NodeInfoReceived,
    /// Node information request done.
    NodeInfoRequestDone,
    /// Node information request failed.
    NodeInfoRequestFailed,
    /// Routing pending.
    RoutingPending,
    /// New node id assigned.
    NewIdAssigned,
    /// Node deleted.
    DeleteDone,
    /// SUC id changed.
    SucId,
    /// Unknown status code.
    Unknown(u8),
}

impl From<u8> for ApplicationUpdateState {
    fn from(code: u8) -> Self {
        match code {
            UPDATE_STATE_NODE_INFO_RECEIVED => ApplicationUpdateState::NodeInfoReceived,
            UPDATE_STATE_NODE_INFO_REQ_DONE => ApplicationUpdateState::NodeInfoRequestDone,
            UPDATE_STATE_NODE_INFO_REQ_FAILED => ApplicationUpdateState::NodeInfoRequestFailed,
            UPDATE_STATE_ROUTING_PENDING => ApplicationUpdateState::RoutingPending,
            UPDATE_STATE_NEW_ID_ASSIGNED => ApplicationUpdateState::NewIdAssigned,
            UPDATE_STATE_DELETE_DONE => ApplicationUpdateState::DeleteDone,
            UPDATE_STATE_SUC_ID => ApplicationUpdateState::SucId,
            _ => ApplicationUpdateState::Unknown(code),
        }
    }
}

/// Device classes and supported command classes from a node information frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeInfo {
    /// Basic device class.
    pub basic_device_class: u8,
    /// Generic device class.
    pub generic_device_class: u8,
    /// Specific device class.
    pub specific_device_class: u8,
    /// Supported command class ids.
    pub command_classes: Vec<u8>,
}

impl NodeInfo {
    /// Structure node information bytes. Returns None if fewer than the three
    /// device class bytes are present.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 3 {
            return None;
        }
        Some(NodeInfo {
            basic_device_class: bytes[0],
            generic_device_class: bytes[1],
            specific_device_class: bytes[2],
            command_classes: bytes[3..].to_vec(),
        })
    }
}

/// Application update notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationUpdate {
    /// Update status.
    pub status: ApplicationUpdateState,
    /// Node the update refers to.
    pub node_id: NodeId,
    /// Length-prefixed info bytes, undecoded.
    pub info: Vec<u8>,
}

impl ApplicationUpdate {
    /// Structured node information, when the update carries a node info frame.
    pub fn node_info(&self) -> Option<NodeInfo> {
        if self.status == ApplicationUpdateState::NodeInfoReceived {
            NodeInfo::from_bytes(&self.info)
        } else {
            None
        }
    }
}

// ============================================================================
// Application Command
// ============================================================================

/// A command class frame received from a node. The command bytes are handed
/// on undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCommand {
    /// Receive status flags.
    pub status: u8,
    /// Source node.
    pub node_id: NodeId,
    /// Command class id.
    pub command_class_id: u8,
    /// Command class bytes following the id.
    pub command_data: Vec<u8>,
}

impl ApplicationCommand {
    /// Received over a busy route.
    pub fn is_routed_busy(&self) -> bool {
        self.status & RECEIVE_STATUS_ROUTED_BUSY != 0
    }

    /// Sent at low power.
    pub fn is_low_power(&self) -> bool {
        self.status & RECEIVE_STATUS_LOW_POWER != 0
    }

    /// Received as a broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.status & RECEIVE_STATUS_TYPE_BROAD != 0
    }

    /// Received as a multicast.
    pub fn is_multicast(&self) -> bool {
        self.status & RECEIVE_STATUS_TYPE_MULTI != 0
    }

    /// Full embedded command, starting with the command class id.
    pub fn command_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.command_data.len());
        bytes.push(self.command_class_id);
        bytes.extend_from_slice(&self.command_data);
        bytes
    }
}

// ============================================================================
// Capabilities
// ============================================================================

/// Controller role flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerCapabilities(pub u8);

impl ControllerCapabilities {
    /// Controller is a secondary controller.
    pub fn is_secondary(&self) -> bool {
        bit_is_set(self.0, 0)
    }

    /// Controller was included into another network.
    pub fn is_on_other_network(&self) -> bool {
        bit_is_set(self.0, 1)
    }

    /// A SIS is present in the network.
    pub fn is_sis_present(&self) -> bool {
        bit_is_set(self.0, 2)
    }

    /// Controller was the original primary.
    pub fn is_real_primary(&self) -> bool {
        bit_is_set(self.0, 3)
    }

    /// Controller is the SUC.
    pub fn is_suc(&self) -> bool {
        bit_is_set(self.0, 4)
    }
}

/// Serial API version, manufacturer ids and supported function codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialApiCapabilities {
    /// Serial API application major version.
    pub application_version: u8,
    /// Serial API application revision.
    pub application_revision: u8,
    /// Manufacturer id.
    pub manufacturer_id: u16,
    /// Product type.
    pub product_type: u16,
    /// Product id.
    pub product_id: u16,
    /// Bit `n-1` set means function code `n` is supported.
    pub function_mask: [u8; FUNCTION_MASK_SIZE],
}

impl SerialApiCapabilities {
    /// Returns true if the controller implements `function_code`.
    pub fn supports(&self, function_code: u8) -> bool {
        if function_code == 0 {
            return false;
        }
        let index = (function_code - 1) as usize;
        bit_is_set(self.function_mask[index / 8], (index % 8) as u8)
    }
}

// ============================================================================
// Inclusion / Exclusion
// ============================================================================

/// Progress of an add-node or remove-node operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionStatus {
    /// Ready for a node to announce itself.
    LearnReady,
    /// A node was found.
    NodeFound,
    /// A slave is being added or removed.
    Slave,
    /// A controller is being added or removed.
    Controller,
    /// Protocol part complete.
    ProtocolDone,
    /// Operation complete.
    Done,
    /// Operation failed.
    Failed,
    /// Unknown status code.
    Unknown(u8),
}

impl From<u8> for InclusionStatus {
    fn from(code: u8) -> Self {
        match code {
            INCLUSION_LEARN_READY => InclusionStatus::LearnReady,
            INCLUSION_NODE_FOUND => InclusionStatus::NodeFound,
            INCLUSION_SLAVE => InclusionStatus::Slave,
            INCLUSION_CONTROLLER => InclusionStatus::Controller,
            INCLUSION_PROTOCOL_DONE => InclusionStatus::ProtocolDone,
            INCLUSION_DONE => InclusionStatus::Done,
            INCLUSION_FAILED => InclusionStatus::Failed,
            _ => InclusionStatus::Unknown(code),
        }
    }
}

/// Inclusion or exclusion progress callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionUpdate {
    /// Callback id of the originating request.
    pub callback_id: u8,
    /// Progress status.
    pub status: InclusionStatus,
    /// Node being added or removed (0 until known).
    pub node_id: NodeId,
    /// Node information, when reported.
    pub node_info: Option<NodeInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_is_set() {
        assert!(bit_is_set(0x80, 7));
        assert!(!bit_is_set(0x80, 6));
        assert!(bit_is_set(0x01, 0));
        assert!(!bit_is_set(0xFF, 8));
    }

    #[test]
    fn test_bit_field() {
        assert_eq!(bit_field(0x92, 3, 3), 0b010);
        assert_eq!(bit_field(0x92, 0, 3), 0b010);
        assert_eq!(bit_field(0xFF, 0, 8), 0xFF);
    }

    #[test]
    fn test_bit_field_out_of_range() {
        assert_eq!(bit_field(0xFF, 8, 1), 0);
        assert_eq!(bit_field(0xFF, 200, 3), 0);
        assert_eq!(bit_field(0xF0, 4, 20), 0x0F);
        assert_eq!(bit_field(0xAB, 0, 255), 0xAB);
    }

    #[test]
    fn test_mask_node_id() {
        assert_eq!(mask_node_id(0, 0), Some(1));
        assert_eq!(mask_node_id(28, 7), Some(232));
        assert_eq!(mask_node_id(31, 6), Some(255));
        assert_eq!(mask_node_id(31, 7), None);
        assert_eq!(mask_node_id(32, 0), None);
        assert_eq!(mask_node_id(0, 8), None);
    }

    #[test]
    fn test_node_mask_single_bit() {
        let mut bytes = [0u8; NODE_MASK_SIZE];
        bytes[0] = 0x02;
        let mask = NodeMask(bytes);
        assert_eq!(mask.node_ids(), vec![2]);
        assert!(mask.contains(2));
        assert!(!mask.contains(1));
        assert!(!mask.contains(0));
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn test_node_mask_ordering_and_bounds() {
        let mut bytes = [0u8; NODE_MASK_SIZE];
        bytes[0] = 0x81;
        bytes[1] = 0x01;
        bytes[NODE_MASK_SIZE - 1] = 0x80;
        let mask = NodeMask(bytes);
        assert_eq!(mask.node_ids(), vec![1, 8, 9, 232]);
        assert!(mask.contains(232));
        assert!(!mask.contains(233));
    }

    #[test]
    fn test_node_mask_from_short_slice() {
        assert!(NodeMask::from_slice(&[0u8; NODE_MASK_SIZE - 1]).is_none());
        assert!(NodeMask::default().is_empty());
    }

    #[test]
    fn test_library_type_codes() {
        assert_eq!(LibraryType::from(0x01), LibraryType::StaticController);
        assert_eq!(LibraryType::from(0x07), LibraryType::BridgeController);
        assert_eq!(LibraryType::from(0x42), LibraryType::Unknown(0x42));
        assert_eq!(u8::from(LibraryType::Unknown(0x42)), 0x42);
    }

    #[test]
    fn test_version_text_trims_nul() {
        let info = VersionInfo {
            library_version: "Z-Wave 2.78\0".to_string(),
            library_type: LibraryType::StaticController,
        };
        assert_eq!(info.version_text(), "Z-Wave 2.78");
    }

    #[test]
    fn test_node_protocol_info_flags() {
        let info = NodeProtocolInfo {
            capability: 0x92,
            security: 0x16,
            reserved: 0x00,
            basic_device_class: 0x02,
            generic_device_class: 0x02,
            specific_device_class: 0x01,
        };
        assert!(info.is_listening());
        assert!(!info.is_routing());
        assert_eq!(info.max_baud_rate(), BaudRate::Baud40000);
        assert_eq!(info.version(), 3);
        assert!(info.is_beaming());
        assert!(info.is_controller());
        assert!(info.has_specific_device());
        assert!(!info.is_routing_slave());
        assert!(!info.has_security());
    }

    #[test]
    fn test_speed_extension_overrides_tier() {
        let info = NodeProtocolInfo {
            capability: 0x92,
            security: 0x00,
            reserved: 0x01,
            basic_device_class: 0,
            generic_device_class: 0,
            specific_device_class: 0,
        };
        assert_eq!(info.max_baud_rate().bits_per_second(), 100000);
        assert_eq!(BaudRate::from_tier(0b001).bits_per_second(), 9600);
    }

    #[test]
    fn test_serial_api_supports() {
        let mut function_mask = [0u8; FUNCTION_MASK_SIZE];
        // function 0x13 -> index 18 -> byte 2, bit 2
        function_mask[2] = 0x04;
        let caps = SerialApiCapabilities {
            application_version: 1,
            application_revision: 0,
            manufacturer_id: 0,
            product_type: 0,
            product_id: 0,
            function_mask,
        };
        assert!(caps.supports(FUNC_ID_ZW_SEND_DATA));
        assert!(!caps.supports(FUNC_ID_ZW_GET_VERSION));
        assert!(!caps.supports(0));
    }

    #[test]
    fn test_application_command_flags() {
        let cmd = ApplicationCommand {
            status: RECEIVE_STATUS_TYPE_BROAD,
            node_id: 14,
            command_class_id: 0x86,
            command_data: vec![0x12],
        };
        assert!(cmd.is_broadcast());
        assert!(!cmd.is_multicast());
        assert_eq!(cmd.command_bytes(), vec![0x86, 0x12]);
    }
}
