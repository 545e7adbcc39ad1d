//! Protocol constants
//!
//! These constants define the marker bytes, direction bytes, function codes and
//! fixed field sizes used by the Z-Wave serial API.

// ============================================================================
// Frame Markers
// ============================================================================

/// Start of a length-prefixed data frame.
pub const SOF: u8 = 0x01;
/// Acknowledge control frame.
pub const ACK: u8 = 0x06;
/// Negative-acknowledge control frame.
pub const NAK: u8 = 0x15;
/// Cancel control frame (frame collision or host busy).
pub const CAN: u8 = 0x18;

// ============================================================================
// Direction Bytes
// ============================================================================

/// Data frame is a request (unsolicited, or a callback from the controller).
pub const DIRECTION_REQUEST: u8 = 0x00;
/// Data frame is a response to a prior host request.
pub const DIRECTION_RESPONSE: u8 = 0x01;

// ============================================================================
// Function Codes
// ============================================================================

/// Serial API init data (node list, API capabilities).
pub const FUNC_ID_SERIAL_API_GET_INIT_DATA: u8 = 0x02;
/// Command class frame received from a node.
pub const FUNC_ID_APPLICATION_COMMAND_HANDLER: u8 = 0x04;
/// Controller role and capability flags.
pub const FUNC_ID_ZW_GET_CONTROLLER_CAPABILITIES: u8 = 0x05;
/// Serial API version, manufacturer ids and supported functions.
pub const FUNC_ID_SERIAL_API_GET_CAPABILITIES: u8 = 0x07;
/// Send data to a node (response = accepted, request = delivery callback).
pub const FUNC_ID_ZW_SEND_DATA: u8 = 0x13;
/// Z-Wave library version and type.
pub const FUNC_ID_ZW_GET_VERSION: u8 = 0x15;
/// Home id and controller node id.
pub const FUNC_ID_ZW_MEMORY_GET_ID: u8 = 0x20;
/// Protocol capabilities of a node.
pub const FUNC_ID_ZW_GET_NODE_PROTOCOL_INFO: u8 = 0x41;
/// Application update (node info frames, inclusion notices).
pub const FUNC_ID_ZW_APPLICATION_UPDATE: u8 = 0x49;
/// Inclusion progress callback.
pub const FUNC_ID_ZW_ADD_NODE_TO_NETWORK: u8 = 0x4A;
/// Exclusion progress callback.
pub const FUNC_ID_ZW_REMOVE_NODE_FROM_NETWORK: u8 = 0x4B;
/// Static update controller node id.
pub const FUNC_ID_ZW_GET_SUC_NODE_ID: u8 = 0x56;
/// Request a node information frame from a node.
pub const FUNC_ID_ZW_REQUEST_NODE_INFO: u8 = 0x60;
/// Neighbour mask of a node.
pub const FUNC_ID_ZW_GET_ROUTING_INFO: u8 = 0x80;

// ============================================================================
// Sizes
// ============================================================================

/// Number of bytes in a node mask (232 node ids).
pub const NODE_MASK_SIZE: usize = 29;
/// Width of the library version text in a version response.
pub const LIBRARY_VERSION_SIZE: usize = 12;
/// Number of bytes in the supported-function bitmask.
pub const FUNCTION_MASK_SIZE: usize = 32;
/// Smallest legal declared length: direction + function code + checksum.
pub const MIN_DATA_LENGTH: usize = 3;
/// Largest length a single length byte can declare.
pub const MAX_DATA_LENGTH: usize = u8::MAX as usize;
/// Default ceiling on the declared length of a data frame.
pub const DEFAULT_MAX_FRAME_LENGTH: usize = 128;

// ============================================================================
// Library Types
// ============================================================================

/// Static controller library.
pub const LIBRARY_STATIC_CONTROLLER: u8 = 0x01;
/// Portable controller library.
pub const LIBRARY_CONTROLLER: u8 = 0x02;
/// Enhanced slave library.
pub const LIBRARY_ENHANCED_SLAVE: u8 = 0x03;
/// Slave library.
pub const LIBRARY_SLAVE: u8 = 0x04;
/// Installer library.
pub const LIBRARY_INSTALLER: u8 = 0x05;
/// Routing slave library.
pub const LIBRARY_ROUTING_SLAVE: u8 = 0x06;
/// Bridge controller library.
pub const LIBRARY_BRIDGE_CONTROLLER: u8 = 0x07;
/// Device under test library.
pub const LIBRARY_DEVICE_UNDER_TEST: u8 = 0x08;

// ============================================================================
// Transmit Status (send data callbacks)
// ============================================================================

/// Frame delivered and acknowledged.
pub const TRANSMIT_COMPLETE_OK: u8 = 0x00;
/// Frame sent but not acknowledged.
pub const TRANSMIT_COMPLETE_NO_ACK: u8 = 0x01;
/// Transmission failed.
pub const TRANSMIT_COMPLETE_FAIL: u8 = 0x02;
/// Routing layer busy.
pub const TRANSMIT_ROUTING_NOT_IDLE: u8 = 0x03;
/// No route to the destination.
pub const TRANSMIT_COMPLETE_NO_ROUTE: u8 = 0x04;

// ============================================================================
// Application Update States
// ============================================================================

/// Node information frame received.
pub const UPDATE_STATE_NODE_INFO_RECEIVED: u8 = 0x84;
/// Node information request completed.
pub const UPDATE_STATE_NODE_INFO_REQ_DONE: u8 = 0x82;
/// Node information request failed.
pub const UPDATE_STATE_NODE_INFO_REQ_FAILED: u8 = 0x81;
/// Routing pending.
pub const UPDATE_STATE_ROUTING_PENDING: u8 = 0x80;
/// New node id assigned.
pub const UPDATE_STATE_NEW_ID_ASSIGNED: u8 = 0x40;
/// Node deleted.
pub const UPDATE_STATE_DELETE_DONE: u8 = 0x20;
/// SUC id changed.
pub const UPDATE_STATE_SUC_ID: u8 = 0x10;

// ============================================================================
// Inclusion / Exclusion Status
// ============================================================================

/// Controller ready to include or exclude.
pub const INCLUSION_LEARN_READY: u8 = 0x01;
/// A node was found.
pub const INCLUSION_NODE_FOUND: u8 = 0x02;
/// A slave is being added or removed.
pub const INCLUSION_SLAVE: u8 = 0x03;
/// A controller is being added or removed.
pub const INCLUSION_CONTROLLER: u8 = 0x04;
/// Protocol part of inclusion complete.
pub const INCLUSION_PROTOCOL_DONE: u8 = 0x05;
/// Operation complete.
pub const INCLUSION_DONE: u8 = 0x06;
/// Operation failed.
pub const INCLUSION_FAILED: u8 = 0x07;

// ============================================================================
// Receive Status Flags (application command handler)
// ============================================================================

/// Frame was routed and the route is busy.
pub const RECEIVE_STATUS_ROUTED_BUSY: u8 = 0x01;
/// Frame was sent at low power.
pub const RECEIVE_STATUS_LOW_POWER: u8 = 0x02;
/// Frame was broadcast.
pub const RECEIVE_STATUS_TYPE_BROAD: u8 = 0x04;
/// Frame was multicast.
pub const RECEIVE_STATUS_TYPE_MULTI: u8 = 0x08;
