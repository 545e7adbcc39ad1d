//! Decoded serial API messages.
//!
//! Each data frame is dispatched on `(direction, function code)` to a payload
//! decoder. Pairs without a decoder come back as [`Message::Unknown`] so new
//! function codes never stall the stream.

use crate::constants::*;
use crate::error::*;
use crate::frame::{ControlFrame, DataFrame, Direction};
use crate::types::*;

/// Messages decoded from data frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Library version and type.
    Version(VersionInfo),

    /// Home id and controller node id.
    MemoryId {
        /// Network home id.
        home_id: i32,
        /// Controller node id.
        node_id: NodeId,
    },

    /// Static update controller.
    SucNodeId {
        /// SUC node id, if one is assigned.
        suc_node_id: Option<NodeId>,
    },

    /// Serial API init data.
    InitData(InitData),

    /// Protocol capabilities of a node.
    NodeProtocolInfo(NodeProtocolInfo),

    /// Send-data acceptance or delivery callback.
    SendData(SendData),

    /// Result of a node info request.
    RequestNodeInfo {
        /// The request was sent.
        sent: bool,
    },

    /// Application update notice.
    ApplicationUpdate(ApplicationUpdate),

    /// Neighbours of a node.
    RoutingInfo {
        /// Nodes directly reachable from the queried node.
        neighbors: NodeMask,
    },

    /// Command class frame received from a node.
    ApplicationCommand(ApplicationCommand),

    /// Controller role flags.
    ControllerCapabilities(ControllerCapabilities),

    /// Serial API capabilities.
    SerialApiCapabilities(SerialApiCapabilities),

    /// Inclusion progress.
    AddNodeToNetwork(InclusionUpdate),

    /// Exclusion progress.
    RemoveNodeFromNetwork(InclusionUpdate),

    /// A frame with no registered decoder.
    Unknown {
        /// Frame direction.
        direction: Direction,
        /// Function code.
        function_code: u8,
        /// Raw payload.
        payload: Vec<u8>,
    },
}

/// A frame emitted by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A single-byte control frame.
    Control(ControlFrame),
    /// A decoded data frame.
    Data(Message),
}

/// A payload decoding rule.
pub type PayloadDecoder = fn(&[u8]) -> Result<Message, ProtocolError>;

/// Registered decoders, keyed by direction and function code.
const REGISTRY: &[(Direction, u8, PayloadDecoder)] = &[
    (Direction::Response, FUNC_ID_ZW_GET_VERSION, decode_version),
    (Direction::Response, FUNC_ID_ZW_MEMORY_GET_ID, decode_memory_id),
    (Direction::Response, FUNC_ID_ZW_GET_SUC_NODE_ID, decode_suc_node_id),
    (Direction::Response, FUNC_ID_SERIAL_API_GET_INIT_DATA, decode_init_data),
    (Direction::Response, FUNC_ID_ZW_GET_NODE_PROTOCOL_INFO, decode_node_protocol_info),
    (Direction::Response, FUNC_ID_ZW_SEND_DATA, decode_send_data_response),
    (Direction::Request, FUNC_ID_ZW_SEND_DATA, decode_send_data_callback),
    (Direction::Response, FUNC_ID_ZW_REQUEST_NODE_INFO, decode_request_node_info),
    (Direction::Request, FUNC_ID_ZW_APPLICATION_UPDATE, decode_application_update),
    (Direction::Response, FUNC_ID_ZW_GET_ROUTING_INFO, decode_routing_info),
    (Direction::Request, FUNC_ID_APPLICATION_COMMAND_HANDLER, decode_application_command),
    (Direction::Response, FUNC_ID_ZW_GET_CONTROLLER_CAPABILITIES, decode_controller_capabilities),
    (Direction::Response, FUNC_ID_SERIAL_API_GET_CAPABILITIES, decode_serial_api_capabilities),
    (Direction::Request, FUNC_ID_ZW_ADD_NODE_TO_NETWORK, decode_add_node),
    (Direction::Request, FUNC_ID_ZW_REMOVE_NODE_FROM_NETWORK, decode_remove_node),
];

/// Look up the decoder for a direction and function code.
pub fn lookup(direction: Direction, function_code: u8) -> Option<PayloadDecoder> {
    REGISTRY
        .iter()
        .find(|(d, code, _)| *d == direction && *code == function_code)
        .map(|&(_, _, decoder)| decoder)
}

impl Message {
    /// Decode a message from a validated data frame.
    ///
    /// Unregistered `(direction, function code)` pairs decode to
    /// [`Message::Unknown`]; a payload too short for its rule is an error.
    pub fn decode(frame: &DataFrame) -> Result<Self, ProtocolError> {
        match lookup(frame.direction, frame.function_code) {
            Some(decoder) => decoder(&frame.payload),
            None => Ok(Message::Unknown {
                direction: frame.direction,
                function_code: frame.function_code,
                payload: frame.payload.clone(),
            }),
        }
    }

    /// Function code of the frame this message came from.
    pub fn function_code(&self) -> u8 {
        match self {
            Message::Version(_) => FUNC_ID_ZW_GET_VERSION,
            Message::MemoryId { .. } => FUNC_ID_ZW_MEMORY_GET_ID,
            Message::SucNodeId { .. } => FUNC_ID_ZW_GET_SUC_NODE_ID,
            Message::InitData(_) => FUNC_ID_SERIAL_API_GET_INIT_DATA,
            Message::NodeProtocolInfo(_) => FUNC_ID_ZW_GET_NODE_PROTOCOL_INFO,
            Message::SendData(_) => FUNC_ID_ZW_SEND_DATA,
            Message::RequestNodeInfo { .. } => FUNC_ID_ZW_REQUEST_NODE_INFO,
            Message::ApplicationUpdate(_) => FUNC_ID_ZW_APPLICATION_UPDATE,
            Message::RoutingInfo { .. } => FUNC_ID_ZW_GET_ROUTING_INFO,
            Message::ApplicationCommand(_) => FUNC_ID_APPLICATION_COMMAND_HANDLER,
            Message::ControllerCapabilities(_) => FUNC_ID_ZW_GET_CONTROLLER_CAPABILITIES,
            Message::SerialApiCapabilities(_) => FUNC_ID_SERIAL_API_GET_CAPABILITIES,
            Message::AddNodeToNetwork(_) => FUNC_ID_ZW_ADD_NODE_TO_NETWORK,
            Message::RemoveNodeFromNetwork(_) => FUNC_ID_ZW_REMOVE_NODE_FROM_NETWORK,
            Message::Unknown { function_code, .. } => *function_code,
        }
    }
}

// ============================================================================
// Helper decode functions
// ============================================================================

fn require(data: &[u8], expected: usize) -> Result<(), ProtocolError> {
    if data.len() < expected {
        Err(ProtocolError::too_short(expected, data.len()))
    } else {
        Ok(())
    }
}

fn decode_version(data: &[u8]) -> Result<Message, ProtocolError> {
    // 12 (version text) + 1 (library type) = 13
    require(data, LIBRARY_VERSION_SIZE + 1)?;

    let text = &data[..LIBRARY_VERSION_SIZE];
    Ok(Message::Version(VersionInfo {
        library_version: String::from_utf8_lossy(text).to_string(),
        library_type: LibraryType::from(data[LIBRARY_VERSION_SIZE]),
    }))
}

fn decode_memory_id(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 5)?;

    let home_id = i32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    Ok(Message::MemoryId {
        home_id,
        node_id: data[4],
    })
}

fn decode_suc_node_id(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 1)?;

    let suc_node_id = match data[0] {
        0 => None,
        id => Some(id),
    };
    Ok(Message::SucNodeId { suc_node_id })
}

fn decode_init_data(data: &[u8]) -> Result<Message, ProtocolError> {
    // 1 (version) + 1 (capabilities) + 1 (mask length) + 29 (mask) + 1 (chip type) + 1 (chip version) = 34
    require(data, 3 + NODE_MASK_SIZE + 2)?;

    let mask_len = data[2] as usize;
    if mask_len != NODE_MASK_SIZE {
        return Err(ProtocolError::InvalidData(format!(
            "node mask length {} (expected {})",
            mask_len, NODE_MASK_SIZE
        )));
    }

    let mask_end = 3 + NODE_MASK_SIZE;
    let node_mask = NodeMask::from_slice(&data[3..mask_end])
        .ok_or_else(|| ProtocolError::too_short(mask_end, data.len()))?;

    Ok(Message::InitData(InitData {
        api_version: data[0],
        capabilities: data[1],
        node_mask,
        chip_type: data[mask_end],
        chip_version: data[mask_end + 1],
    }))
}

fn decode_node_protocol_info(data: &[u8]) -> Result<Message, ProtocolError> {
    // capability, security, reserved, basic, generic, specific
    require(data, 6)?;

    Ok(Message::NodeProtocolInfo(NodeProtocolInfo {
        capability: data[0],
        security: data[1],
        reserved: data[2],
        basic_device_class: data[3],
        generic_device_class: data[4],
        specific_device_class: data[5],
    }))
}

fn decode_send_data_response(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 1)?;

    Ok(Message::SendData(SendData {
        direction: Direction::Response,
        return_value: Some(data[0]),
        callback_id: None,
        transmit_status: None,
        transmit_report: Vec::new(),
    }))
}

fn decode_send_data_callback(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 2)?;

    Ok(Message::SendData(SendData {
        direction: Direction::Request,
        return_value: None,
        callback_id: Some(data[0]),
        transmit_status: Some(TransmitStatus::from(data[1])),
        transmit_report: data[2..].to_vec(),
    }))
}

fn decode_request_node_info(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 1)?;

    Ok(Message::RequestNodeInfo {
        sent: data[0] == 0x01,
    })
}

/// Take the `len` bytes after the length byte at `len_index`.
///
/// A missing length byte yields an empty slice. A length that runs past the
/// end of `data` is an error.
fn length_prefixed(data: &[u8], len_index: usize) -> Result<&[u8], ProtocolError> {
    let Some(&len) = data.get(len_index) else {
        return Ok(&[]);
    };
    let start = len_index + 1;
    let end = start + len as usize;
    if end > data.len() {
        return Err(ProtocolError::too_short(end, data.len()));
    }
    Ok(&data[start..end])
}

fn decode_application_update(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 2)?;

    Ok(Message::ApplicationUpdate(ApplicationUpdate {
        status: ApplicationUpdateState::from(data[0]),
        node_id: data[1],
        info: length_prefixed(data, 2)?.to_vec(),
    }))
}

fn decode_routing_info(data: &[u8]) -> Result<Message, ProtocolError> {
    let neighbors = NodeMask::from_slice(data)
        .ok_or_else(|| ProtocolError::too_short(NODE_MASK_SIZE, data.len()))?;
    Ok(Message::RoutingInfo { neighbors })
}

fn decode_application_command(data: &[u8]) -> Result<Message, ProtocolError> {
    // status + node id + command length + command class id = 4
    require(data, 4)?;

    let command = length_prefixed(data, 2)?;
    if command.is_empty() {
        return Err(ProtocolError::InvalidData(
            "empty command class frame".to_string(),
        ));
    }

    Ok(Message::ApplicationCommand(ApplicationCommand {
        status: data[0],
        node_id: data[1],
        command_class_id: command[0],
        command_data: command[1..].to_vec(),
    }))
}

fn decode_controller_capabilities(data: &[u8]) -> Result<Message, ProtocolError> {
    require(data, 1)?;
    Ok(Message::ControllerCapabilities(ControllerCapabilities(data[0])))
}

fn decode_serial_api_capabilities(data: &[u8]) -> Result<Message, ProtocolError> {
    // 2 (app version) + 2 (manufacturer) + 2 (product type) + 2 (product id) + 32 (function mask) = 40
    require(data, 8 + FUNCTION_MASK_SIZE)?;

    let mut function_mask = [0u8; FUNCTION_MASK_SIZE];
    function_mask.copy_from_slice(&data[8..8 + FUNCTION_MASK_SIZE]);

    Ok(Message::SerialApiCapabilities(SerialApiCapabilities {
        application_version: data[0],
        application_revision: data[1],
        manufacturer_id: u16::from_be_bytes([data[2], data[3]]),
        product_type: u16::from_be_bytes([data[4], data[5]]),
        product_id: u16::from_be_bytes([data[6], data[7]]),
        function_mask,
    }))
}

fn decode_inclusion_update(data: &[u8]) -> Result<InclusionUpdate, ProtocolError> {
    // callback id + status + node id = 3, then optional length-prefixed node info
    require(data, 3)?;
    let info = length_prefixed(data, 3)?;

    Ok(InclusionUpdate {
        callback_id: data[0],
        status: InclusionStatus::from(data[1]),
        node_id: data[2],
        node_info: NodeInfo::from_bytes(info),
    })
}

fn decode_add_node(data: &[u8]) -> Result<Message, ProtocolError> {
    decode_inclusion_update(data).map(Message::AddNodeToNetwork)
}

fn decode_remove_node(data: &[u8]) -> Result<Message, ProtocolError> {
    decode_inclusion_update(data).map(Message::RemoveNodeFromNetwork)
}
