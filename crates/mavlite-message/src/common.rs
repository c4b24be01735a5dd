//! The MAVLink 1.0 `common` message set.
//!
//! Generated from the `common.xml` dialect definition. Do not edit by hand;
//! field order is wire order (largest scalar first, as the generator sorts
//! it), not declaration order.
//!
//! `FILE_TRANSFER_START` (254 bytes) and `ENCAPSULATED_DATA` (255 bytes) are
//! omitted: their payloads exceed [`MAX_PAYLOAD_LEN`](crate::MAX_PAYLOAD_LEN)
//! and no conforming receiver would ever accept them.

use crate::descriptor::MessageDescriptor;
use crate::types::{FieldDef, Scalar};

/// Message ids of the `common` set.
pub mod id {
    pub const HEARTBEAT: u8 = 0;
    pub const SYS_STATUS: u8 = 1;
    pub const SYSTEM_TIME: u8 = 2;
    pub const PING: u8 = 4;
    pub const CHANGE_OPERATOR_CONTROL: u8 = 5;
    pub const CHANGE_OPERATOR_CONTROL_ACK: u8 = 6;
    pub const AUTH_KEY: u8 = 7;
    pub const SET_MODE: u8 = 11;
    pub const PARAM_REQUEST_READ: u8 = 20;
    pub const PARAM_REQUEST_LIST: u8 = 21;
    pub const PARAM_VALUE: u8 = 22;
    pub const PARAM_SET: u8 = 23;
    pub const GPS_RAW_INT: u8 = 24;
    pub const GPS_STATUS: u8 = 25;
    pub const SCALED_IMU: u8 = 26;
    pub const RAW_IMU: u8 = 27;
    pub const RAW_PRESSURE: u8 = 28;
    pub const SCALED_PRESSURE: u8 = 29;
    pub const ATTITUDE: u8 = 30;
    pub const ATTITUDE_QUATERNION: u8 = 31;
    pub const LOCAL_POSITION_NED: u8 = 32;
    pub const GLOBAL_POSITION_INT: u8 = 33;
    pub const RC_CHANNELS_SCALED: u8 = 34;
    pub const RC_CHANNELS_RAW: u8 = 35;
    pub const SERVO_OUTPUT_RAW: u8 = 36;
    pub const MISSION_REQUEST_PARTIAL_LIST: u8 = 37;
    pub const MISSION_WRITE_PARTIAL_LIST: u8 = 38;
    pub const MISSION_ITEM: u8 = 39;
    pub const MISSION_REQUEST: u8 = 40;
    pub const MISSION_SET_CURRENT: u8 = 41;
    pub const MISSION_CURRENT: u8 = 42;
    pub const MISSION_REQUEST_LIST: u8 = 43;
    pub const MISSION_COUNT: u8 = 44;
    pub const MISSION_CLEAR_ALL: u8 = 45;
    pub const MISSION_ITEM_REACHED: u8 = 46;
    pub const MISSION_ACK: u8 = 47;
    pub const SET_GPS_GLOBAL_ORIGIN: u8 = 48;
    pub const GPS_GLOBAL_ORIGIN: u8 = 49;
    pub const SET_LOCAL_POSITION_SETPOINT: u8 = 50;
    pub const LOCAL_POSITION_SETPOINT: u8 = 51;
    pub const GLOBAL_POSITION_SETPOINT_INT: u8 = 52;
    pub const SET_GLOBAL_POSITION_SETPOINT_INT: u8 = 53;
    pub const SAFETY_SET_ALLOWED_AREA: u8 = 54;
    pub const SAFETY_ALLOWED_AREA: u8 = 55;
    pub const SET_ROLL_PITCH_YAW_THRUST: u8 = 56;
    pub const SET_ROLL_PITCH_YAW_SPEED_THRUST: u8 = 57;
    pub const ROLL_PITCH_YAW_THRUST_SETPOINT: u8 = 58;
    pub const ROLL_PITCH_YAW_SPEED_THRUST_SETPOINT: u8 = 59;
    pub const SET_QUAD_MOTORS_SETPOINT: u8 = 60;
    pub const SET_QUAD_SWARM_ROLL_PITCH_YAW_THRUST: u8 = 61;
    pub const NAV_CONTROLLER_OUTPUT: u8 = 62;
    pub const SET_QUAD_SWARM_LED_ROLL_PITCH_YAW_THRUST: u8 = 63;
    pub const STATE_CORRECTION: u8 = 64;
    pub const RC_CHANNELS: u8 = 65;
    pub const REQUEST_DATA_STREAM: u8 = 66;
    pub const DATA_STREAM: u8 = 67;
    pub const MANUAL_CONTROL: u8 = 69;
    pub const RC_CHANNELS_OVERRIDE: u8 = 70;
    pub const VFR_HUD: u8 = 74;
    pub const COMMAND_LONG: u8 = 76;
    pub const COMMAND_ACK: u8 = 77;
    pub const ROLL_PITCH_YAW_RATES_THRUST_SETPOINT: u8 = 80;
    pub const MANUAL_SETPOINT: u8 = 81;
    pub const ATTITUDE_SETPOINT_EXTERNAL: u8 = 82;
    pub const LOCAL_NED_POSITION_SETPOINT_EXTERNAL: u8 = 83;
    pub const GLOBAL_POSITION_SETPOINT_EXTERNAL_INT: u8 = 84;
    pub const LOCAL_POSITION_NED_SYSTEM_GLOBAL_OFFSET: u8 = 89;
    pub const HIL_STATE: u8 = 90;
    pub const HIL_CONTROLS: u8 = 91;
    pub const HIL_RC_INPUTS_RAW: u8 = 92;
    pub const OPTICAL_FLOW: u8 = 100;
    pub const GLOBAL_VISION_POSITION_ESTIMATE: u8 = 101;
    pub const VISION_POSITION_ESTIMATE: u8 = 102;
    pub const VISION_SPEED_ESTIMATE: u8 = 103;
    pub const VICON_POSITION_ESTIMATE: u8 = 104;
    pub const HIGHRES_IMU: u8 = 105;
    pub const OMNIDIRECTIONAL_FLOW: u8 = 106;
    pub const HIL_SENSOR: u8 = 107;
    pub const SIM_STATE: u8 = 108;
    pub const RADIO_STATUS: u8 = 109;
    pub const FILE_TRANSFER_DIR_LIST: u8 = 111;
    pub const FILE_TRANSFER_RES: u8 = 112;
    pub const HIL_GPS: u8 = 113;
    pub const HIL_OPTICAL_FLOW: u8 = 114;
    pub const HIL_STATE_QUATERNION: u8 = 115;
    pub const SCALED_IMU2: u8 = 116;
    pub const LOG_REQUEST_LIST: u8 = 117;
    pub const LOG_ENTRY: u8 = 118;
    pub const LOG_REQUEST_DATA: u8 = 119;
    pub const LOG_DATA: u8 = 120;
    pub const LOG_ERASE: u8 = 121;
    pub const LOG_REQUEST_END: u8 = 122;
    pub const GPS_INJECT_DATA: u8 = 123;
    pub const GPS2_RAW: u8 = 124;
    pub const POWER_STATUS: u8 = 125;
    pub const SERIAL_CONTROL: u8 = 126;
    pub const GPS_RTK: u8 = 127;
    pub const GPS2_RTK: u8 = 128;
    pub const DATA_TRANSMISSION_HANDSHAKE: u8 = 130;
    pub const DISTANCE_SENSOR: u8 = 132;
    pub const TERRAIN_REQUEST: u8 = 133;
    pub const TERRAIN_DATA: u8 = 134;
    pub const TERRAIN_CHECK: u8 = 135;
    pub const TERRAIN_REPORT: u8 = 136;
    pub const BATTERY_STATUS: u8 = 147;
    pub const SETPOINT_8DOF: u8 = 148;
    pub const SETPOINT_6DOF: u8 = 149;
    pub const MEMORY_VECT: u8 = 249;
    pub const DEBUG_VECT: u8 = 250;
    pub const NAMED_VALUE_FLOAT: u8 = 251;
    pub const NAMED_VALUE_INT: u8 = 252;
    pub const STATUSTEXT: u8 = 253;
    pub const DEBUG: u8 = 254;
}

/// Descriptors of the `common` set, sorted by message id.
pub static MESSAGES: &[MessageDescriptor] = &[
    MessageDescriptor {
        id: id::HEARTBEAT,
        name: "HEARTBEAT",
        length: 9,
        crc_extra: 50,
        fields: &[
            FieldDef::scalar("custom_mode", Scalar::U32),
            FieldDef::scalar("type", Scalar::U8),
            FieldDef::scalar("autopilot", Scalar::U8),
            FieldDef::scalar("base_mode", Scalar::U8),
            FieldDef::scalar("system_status", Scalar::U8),
            FieldDef::scalar("mavlink_version", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SYS_STATUS,
        name: "SYS_STATUS",
        length: 31,
        crc_extra: 124,
        fields: &[
            FieldDef::scalar("onboard_control_sensors_present", Scalar::U32),
            FieldDef::scalar("onboard_control_sensors_enabled", Scalar::U32),
            FieldDef::scalar("onboard_control_sensors_health", Scalar::U32),
            FieldDef::scalar("load", Scalar::U16),
            FieldDef::scalar("voltage_battery", Scalar::U16),
            FieldDef::scalar("current_battery", Scalar::I16),
            FieldDef::scalar("drop_rate_comm", Scalar::U16),
            FieldDef::scalar("errors_comm", Scalar::U16),
            FieldDef::scalar("errors_count1", Scalar::U16),
            FieldDef::scalar("errors_count2", Scalar::U16),
            FieldDef::scalar("errors_count3", Scalar::U16),
            FieldDef::scalar("errors_count4", Scalar::U16),
            FieldDef::scalar("battery_remaining", Scalar::I8),
        ],
    },
    MessageDescriptor {
        id: id::SYSTEM_TIME,
        name: "SYSTEM_TIME",
        length: 12,
        crc_extra: 137,
        fields: &[
            FieldDef::scalar("time_unix_usec", Scalar::U64),
            FieldDef::scalar("time_boot_ms", Scalar::U32),
        ],
    },
    MessageDescriptor {
        id: id::PING,
        name: "PING",
        length: 14,
        crc_extra: 237,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("seq", Scalar::U32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::CHANGE_OPERATOR_CONTROL,
        name: "CHANGE_OPERATOR_CONTROL",
        length: 28,
        crc_extra: 217,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("control_request", Scalar::U8),
            FieldDef::scalar("version", Scalar::U8),
            FieldDef::text("passkey", 25),
        ],
    },
    MessageDescriptor {
        id: id::CHANGE_OPERATOR_CONTROL_ACK,
        name: "CHANGE_OPERATOR_CONTROL_ACK",
        length: 3,
        crc_extra: 104,
        fields: &[
            FieldDef::scalar("gcs_system_id", Scalar::U8),
            FieldDef::scalar("control_request", Scalar::U8),
            FieldDef::scalar("ack", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::AUTH_KEY,
        name: "AUTH_KEY",
        length: 32,
        crc_extra: 119,
        fields: &[
            FieldDef::text("key", 32),
        ],
    },
    MessageDescriptor {
        id: id::SET_MODE,
        name: "SET_MODE",
        length: 6,
        crc_extra: 89,
        fields: &[
            FieldDef::scalar("custom_mode", Scalar::U32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("base_mode", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::PARAM_REQUEST_READ,
        name: "PARAM_REQUEST_READ",
        length: 20,
        crc_extra: 214,
        fields: &[
            FieldDef::scalar("param_index", Scalar::I16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::text("param_id", 16),
        ],
    },
    MessageDescriptor {
        id: id::PARAM_REQUEST_LIST,
        name: "PARAM_REQUEST_LIST",
        length: 2,
        crc_extra: 159,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::PARAM_VALUE,
        name: "PARAM_VALUE",
        length: 25,
        crc_extra: 220,
        fields: &[
            FieldDef::scalar("param_value", Scalar::F32),
            FieldDef::scalar("param_count", Scalar::U16),
            FieldDef::scalar("param_index", Scalar::U16),
            FieldDef::text("param_id", 16),
            FieldDef::scalar("param_type", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::PARAM_SET,
        name: "PARAM_SET",
        length: 23,
        crc_extra: 168,
        fields: &[
            FieldDef::scalar("param_value", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::text("param_id", 16),
            FieldDef::scalar("param_type", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GPS_RAW_INT,
        name: "GPS_RAW_INT",
        length: 30,
        crc_extra: 24,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("eph", Scalar::U16),
            FieldDef::scalar("epv", Scalar::U16),
            FieldDef::scalar("vel", Scalar::U16),
            FieldDef::scalar("cog", Scalar::U16),
            FieldDef::scalar("fix_type", Scalar::U8),
            FieldDef::scalar("satellites_visible", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GPS_STATUS,
        name: "GPS_STATUS",
        length: 101,
        crc_extra: 23,
        fields: &[
            FieldDef::scalar("satellites_visible", Scalar::U8),
            FieldDef::array("satellite_prn", Scalar::U8, 20),
            FieldDef::array("satellite_used", Scalar::U8, 20),
            FieldDef::array("satellite_elevation", Scalar::U8, 20),
            FieldDef::array("satellite_azimuth", Scalar::U8, 20),
            FieldDef::array("satellite_snr", Scalar::U8, 20),
        ],
    },
    MessageDescriptor {
        id: id::SCALED_IMU,
        name: "SCALED_IMU",
        length: 22,
        crc_extra: 170,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("xacc", Scalar::I16),
            FieldDef::scalar("yacc", Scalar::I16),
            FieldDef::scalar("zacc", Scalar::I16),
            FieldDef::scalar("xgyro", Scalar::I16),
            FieldDef::scalar("ygyro", Scalar::I16),
            FieldDef::scalar("zgyro", Scalar::I16),
            FieldDef::scalar("xmag", Scalar::I16),
            FieldDef::scalar("ymag", Scalar::I16),
            FieldDef::scalar("zmag", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::RAW_IMU,
        name: "RAW_IMU",
        length: 26,
        crc_extra: 144,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("xacc", Scalar::I16),
            FieldDef::scalar("yacc", Scalar::I16),
            FieldDef::scalar("zacc", Scalar::I16),
            FieldDef::scalar("xgyro", Scalar::I16),
            FieldDef::scalar("ygyro", Scalar::I16),
            FieldDef::scalar("zgyro", Scalar::I16),
            FieldDef::scalar("xmag", Scalar::I16),
            FieldDef::scalar("ymag", Scalar::I16),
            FieldDef::scalar("zmag", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::RAW_PRESSURE,
        name: "RAW_PRESSURE",
        length: 16,
        crc_extra: 67,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("press_abs", Scalar::I16),
            FieldDef::scalar("press_diff1", Scalar::I16),
            FieldDef::scalar("press_diff2", Scalar::I16),
            FieldDef::scalar("temperature", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::SCALED_PRESSURE,
        name: "SCALED_PRESSURE",
        length: 14,
        crc_extra: 115,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("press_abs", Scalar::F32),
            FieldDef::scalar("press_diff", Scalar::F32),
            FieldDef::scalar("temperature", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::ATTITUDE,
        name: "ATTITUDE",
        length: 28,
        crc_extra: 39,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("rollspeed", Scalar::F32),
            FieldDef::scalar("pitchspeed", Scalar::F32),
            FieldDef::scalar("yawspeed", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::ATTITUDE_QUATERNION,
        name: "ATTITUDE_QUATERNION",
        length: 32,
        crc_extra: 246,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("q1", Scalar::F32),
            FieldDef::scalar("q2", Scalar::F32),
            FieldDef::scalar("q3", Scalar::F32),
            FieldDef::scalar("q4", Scalar::F32),
            FieldDef::scalar("rollspeed", Scalar::F32),
            FieldDef::scalar("pitchspeed", Scalar::F32),
            FieldDef::scalar("yawspeed", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::LOCAL_POSITION_NED,
        name: "LOCAL_POSITION_NED",
        length: 28,
        crc_extra: 185,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("vx", Scalar::F32),
            FieldDef::scalar("vy", Scalar::F32),
            FieldDef::scalar("vz", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::GLOBAL_POSITION_INT,
        name: "GLOBAL_POSITION_INT",
        length: 28,
        crc_extra: 104,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("relative_alt", Scalar::I32),
            FieldDef::scalar("vx", Scalar::I16),
            FieldDef::scalar("vy", Scalar::I16),
            FieldDef::scalar("vz", Scalar::I16),
            FieldDef::scalar("hdg", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::RC_CHANNELS_SCALED,
        name: "RC_CHANNELS_SCALED",
        length: 22,
        crc_extra: 237,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("chan1_scaled", Scalar::I16),
            FieldDef::scalar("chan2_scaled", Scalar::I16),
            FieldDef::scalar("chan3_scaled", Scalar::I16),
            FieldDef::scalar("chan4_scaled", Scalar::I16),
            FieldDef::scalar("chan5_scaled", Scalar::I16),
            FieldDef::scalar("chan6_scaled", Scalar::I16),
            FieldDef::scalar("chan7_scaled", Scalar::I16),
            FieldDef::scalar("chan8_scaled", Scalar::I16),
            FieldDef::scalar("port", Scalar::U8),
            FieldDef::scalar("rssi", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::RC_CHANNELS_RAW,
        name: "RC_CHANNELS_RAW",
        length: 22,
        crc_extra: 244,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("chan1_raw", Scalar::U16),
            FieldDef::scalar("chan2_raw", Scalar::U16),
            FieldDef::scalar("chan3_raw", Scalar::U16),
            FieldDef::scalar("chan4_raw", Scalar::U16),
            FieldDef::scalar("chan5_raw", Scalar::U16),
            FieldDef::scalar("chan6_raw", Scalar::U16),
            FieldDef::scalar("chan7_raw", Scalar::U16),
            FieldDef::scalar("chan8_raw", Scalar::U16),
            FieldDef::scalar("port", Scalar::U8),
            FieldDef::scalar("rssi", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SERVO_OUTPUT_RAW,
        name: "SERVO_OUTPUT_RAW",
        length: 21,
        crc_extra: 222,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U32),
            FieldDef::scalar("servo1_raw", Scalar::U16),
            FieldDef::scalar("servo2_raw", Scalar::U16),
            FieldDef::scalar("servo3_raw", Scalar::U16),
            FieldDef::scalar("servo4_raw", Scalar::U16),
            FieldDef::scalar("servo5_raw", Scalar::U16),
            FieldDef::scalar("servo6_raw", Scalar::U16),
            FieldDef::scalar("servo7_raw", Scalar::U16),
            FieldDef::scalar("servo8_raw", Scalar::U16),
            FieldDef::scalar("port", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_REQUEST_PARTIAL_LIST,
        name: "MISSION_REQUEST_PARTIAL_LIST",
        length: 6,
        crc_extra: 212,
        fields: &[
            FieldDef::scalar("start_index", Scalar::I16),
            FieldDef::scalar("end_index", Scalar::I16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_WRITE_PARTIAL_LIST,
        name: "MISSION_WRITE_PARTIAL_LIST",
        length: 6,
        crc_extra: 9,
        fields: &[
            FieldDef::scalar("start_index", Scalar::I16),
            FieldDef::scalar("end_index", Scalar::I16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_ITEM,
        name: "MISSION_ITEM",
        length: 37,
        crc_extra: 254,
        fields: &[
            FieldDef::scalar("param1", Scalar::F32),
            FieldDef::scalar("param2", Scalar::F32),
            FieldDef::scalar("param3", Scalar::F32),
            FieldDef::scalar("param4", Scalar::F32),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("seq", Scalar::U16),
            FieldDef::scalar("command", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("frame", Scalar::U8),
            FieldDef::scalar("current", Scalar::U8),
            FieldDef::scalar("autocontinue", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_REQUEST,
        name: "MISSION_REQUEST",
        length: 4,
        crc_extra: 230,
        fields: &[
            FieldDef::scalar("seq", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_SET_CURRENT,
        name: "MISSION_SET_CURRENT",
        length: 4,
        crc_extra: 28,
        fields: &[
            FieldDef::scalar("seq", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_CURRENT,
        name: "MISSION_CURRENT",
        length: 2,
        crc_extra: 28,
        fields: &[
            FieldDef::scalar("seq", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_REQUEST_LIST,
        name: "MISSION_REQUEST_LIST",
        length: 2,
        crc_extra: 132,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_COUNT,
        name: "MISSION_COUNT",
        length: 4,
        crc_extra: 221,
        fields: &[
            FieldDef::scalar("count", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_CLEAR_ALL,
        name: "MISSION_CLEAR_ALL",
        length: 2,
        crc_extra: 232,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_ITEM_REACHED,
        name: "MISSION_ITEM_REACHED",
        length: 2,
        crc_extra: 11,
        fields: &[
            FieldDef::scalar("seq", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::MISSION_ACK,
        name: "MISSION_ACK",
        length: 3,
        crc_extra: 153,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("type", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SET_GPS_GLOBAL_ORIGIN,
        name: "SET_GPS_GLOBAL_ORIGIN",
        length: 13,
        crc_extra: 41,
        fields: &[
            FieldDef::scalar("latitude", Scalar::I32),
            FieldDef::scalar("longitude", Scalar::I32),
            FieldDef::scalar("altitude", Scalar::I32),
            FieldDef::scalar("target_system", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GPS_GLOBAL_ORIGIN,
        name: "GPS_GLOBAL_ORIGIN",
        length: 12,
        crc_extra: 39,
        fields: &[
            FieldDef::scalar("latitude", Scalar::I32),
            FieldDef::scalar("longitude", Scalar::I32),
            FieldDef::scalar("altitude", Scalar::I32),
        ],
    },
    MessageDescriptor {
        id: id::SET_LOCAL_POSITION_SETPOINT,
        name: "SET_LOCAL_POSITION_SETPOINT",
        length: 19,
        crc_extra: 214,
        fields: &[
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("coordinate_frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOCAL_POSITION_SETPOINT,
        name: "LOCAL_POSITION_SETPOINT",
        length: 17,
        crc_extra: 223,
        fields: &[
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("coordinate_frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GLOBAL_POSITION_SETPOINT_INT,
        name: "GLOBAL_POSITION_SETPOINT_INT",
        length: 15,
        crc_extra: 141,
        fields: &[
            FieldDef::scalar("latitude", Scalar::I32),
            FieldDef::scalar("longitude", Scalar::I32),
            FieldDef::scalar("altitude", Scalar::I32),
            FieldDef::scalar("yaw", Scalar::I16),
            FieldDef::scalar("coordinate_frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SET_GLOBAL_POSITION_SETPOINT_INT,
        name: "SET_GLOBAL_POSITION_SETPOINT_INT",
        length: 15,
        crc_extra: 33,
        fields: &[
            FieldDef::scalar("latitude", Scalar::I32),
            FieldDef::scalar("longitude", Scalar::I32),
            FieldDef::scalar("altitude", Scalar::I32),
            FieldDef::scalar("yaw", Scalar::I16),
            FieldDef::scalar("coordinate_frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SAFETY_SET_ALLOWED_AREA,
        name: "SAFETY_SET_ALLOWED_AREA",
        length: 27,
        crc_extra: 15,
        fields: &[
            FieldDef::scalar("p1x", Scalar::F32),
            FieldDef::scalar("p1y", Scalar::F32),
            FieldDef::scalar("p1z", Scalar::F32),
            FieldDef::scalar("p2x", Scalar::F32),
            FieldDef::scalar("p2y", Scalar::F32),
            FieldDef::scalar("p2z", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SAFETY_ALLOWED_AREA,
        name: "SAFETY_ALLOWED_AREA",
        length: 25,
        crc_extra: 3,
        fields: &[
            FieldDef::scalar("p1x", Scalar::F32),
            FieldDef::scalar("p1y", Scalar::F32),
            FieldDef::scalar("p1z", Scalar::F32),
            FieldDef::scalar("p2x", Scalar::F32),
            FieldDef::scalar("p2y", Scalar::F32),
            FieldDef::scalar("p2z", Scalar::F32),
            FieldDef::scalar("frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SET_ROLL_PITCH_YAW_THRUST,
        name: "SET_ROLL_PITCH_YAW_THRUST",
        length: 18,
        crc_extra: 100,
        fields: &[
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SET_ROLL_PITCH_YAW_SPEED_THRUST,
        name: "SET_ROLL_PITCH_YAW_SPEED_THRUST",
        length: 18,
        crc_extra: 24,
        fields: &[
            FieldDef::scalar("roll_speed", Scalar::F32),
            FieldDef::scalar("pitch_speed", Scalar::F32),
            FieldDef::scalar("yaw_speed", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::ROLL_PITCH_YAW_THRUST_SETPOINT,
        name: "ROLL_PITCH_YAW_THRUST_SETPOINT",
        length: 20,
        crc_extra: 239,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::ROLL_PITCH_YAW_SPEED_THRUST_SETPOINT,
        name: "ROLL_PITCH_YAW_SPEED_THRUST_SETPOINT",
        length: 20,
        crc_extra: 238,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("roll_speed", Scalar::F32),
            FieldDef::scalar("pitch_speed", Scalar::F32),
            FieldDef::scalar("yaw_speed", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::SET_QUAD_MOTORS_SETPOINT,
        name: "SET_QUAD_MOTORS_SETPOINT",
        length: 9,
        crc_extra: 30,
        fields: &[
            FieldDef::scalar("motor_front_nw", Scalar::U16),
            FieldDef::scalar("motor_right_ne", Scalar::U16),
            FieldDef::scalar("motor_back_se", Scalar::U16),
            FieldDef::scalar("motor_left_sw", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SET_QUAD_SWARM_ROLL_PITCH_YAW_THRUST,
        name: "SET_QUAD_SWARM_ROLL_PITCH_YAW_THRUST",
        length: 34,
        crc_extra: 240,
        fields: &[
            FieldDef::array("roll", Scalar::I16, 4),
            FieldDef::array("pitch", Scalar::I16, 4),
            FieldDef::array("yaw", Scalar::I16, 4),
            FieldDef::array("thrust", Scalar::U16, 4),
            FieldDef::scalar("group", Scalar::U8),
            FieldDef::scalar("mode", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::NAV_CONTROLLER_OUTPUT,
        name: "NAV_CONTROLLER_OUTPUT",
        length: 26,
        crc_extra: 183,
        fields: &[
            FieldDef::scalar("nav_roll", Scalar::F32),
            FieldDef::scalar("nav_pitch", Scalar::F32),
            FieldDef::scalar("alt_error", Scalar::F32),
            FieldDef::scalar("aspd_error", Scalar::F32),
            FieldDef::scalar("xtrack_error", Scalar::F32),
            FieldDef::scalar("nav_bearing", Scalar::I16),
            FieldDef::scalar("target_bearing", Scalar::I16),
            FieldDef::scalar("wp_dist", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::SET_QUAD_SWARM_LED_ROLL_PITCH_YAW_THRUST,
        name: "SET_QUAD_SWARM_LED_ROLL_PITCH_YAW_THRUST",
        length: 46,
        crc_extra: 130,
        fields: &[
            FieldDef::array("roll", Scalar::I16, 4),
            FieldDef::array("pitch", Scalar::I16, 4),
            FieldDef::array("yaw", Scalar::I16, 4),
            FieldDef::array("thrust", Scalar::U16, 4),
            FieldDef::scalar("group", Scalar::U8),
            FieldDef::scalar("mode", Scalar::U8),
            FieldDef::array("led_red", Scalar::U8, 4),
            FieldDef::array("led_blue", Scalar::U8, 4),
            FieldDef::array("led_green", Scalar::U8, 4),
        ],
    },
    MessageDescriptor {
        id: id::STATE_CORRECTION,
        name: "STATE_CORRECTION",
        length: 36,
        crc_extra: 130,
        fields: &[
            FieldDef::scalar("xerr", Scalar::F32),
            FieldDef::scalar("yerr", Scalar::F32),
            FieldDef::scalar("zerr", Scalar::F32),
            FieldDef::scalar("rollerr", Scalar::F32),
            FieldDef::scalar("pitcherr", Scalar::F32),
            FieldDef::scalar("yawerr", Scalar::F32),
            FieldDef::scalar("vxerr", Scalar::F32),
            FieldDef::scalar("vyerr", Scalar::F32),
            FieldDef::scalar("vzerr", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::RC_CHANNELS,
        name: "RC_CHANNELS",
        length: 42,
        crc_extra: 118,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("chan1_raw", Scalar::U16),
            FieldDef::scalar("chan2_raw", Scalar::U16),
            FieldDef::scalar("chan3_raw", Scalar::U16),
            FieldDef::scalar("chan4_raw", Scalar::U16),
            FieldDef::scalar("chan5_raw", Scalar::U16),
            FieldDef::scalar("chan6_raw", Scalar::U16),
            FieldDef::scalar("chan7_raw", Scalar::U16),
            FieldDef::scalar("chan8_raw", Scalar::U16),
            FieldDef::scalar("chan9_raw", Scalar::U16),
            FieldDef::scalar("chan10_raw", Scalar::U16),
            FieldDef::scalar("chan11_raw", Scalar::U16),
            FieldDef::scalar("chan12_raw", Scalar::U16),
            FieldDef::scalar("chan13_raw", Scalar::U16),
            FieldDef::scalar("chan14_raw", Scalar::U16),
            FieldDef::scalar("chan15_raw", Scalar::U16),
            FieldDef::scalar("chan16_raw", Scalar::U16),
            FieldDef::scalar("chan17_raw", Scalar::U16),
            FieldDef::scalar("chan18_raw", Scalar::U16),
            FieldDef::scalar("chancount", Scalar::U8),
            FieldDef::scalar("rssi", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::REQUEST_DATA_STREAM,
        name: "REQUEST_DATA_STREAM",
        length: 6,
        crc_extra: 148,
        fields: &[
            FieldDef::scalar("req_message_rate", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("req_stream_id", Scalar::U8),
            FieldDef::scalar("start_stop", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::DATA_STREAM,
        name: "DATA_STREAM",
        length: 4,
        crc_extra: 21,
        fields: &[
            FieldDef::scalar("message_rate", Scalar::U16),
            FieldDef::scalar("stream_id", Scalar::U8),
            FieldDef::scalar("on_off", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MANUAL_CONTROL,
        name: "MANUAL_CONTROL",
        length: 11,
        crc_extra: 243,
        fields: &[
            FieldDef::scalar("x", Scalar::I16),
            FieldDef::scalar("y", Scalar::I16),
            FieldDef::scalar("z", Scalar::I16),
            FieldDef::scalar("r", Scalar::I16),
            FieldDef::scalar("buttons", Scalar::U16),
            FieldDef::scalar("target", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::RC_CHANNELS_OVERRIDE,
        name: "RC_CHANNELS_OVERRIDE",
        length: 18,
        crc_extra: 124,
        fields: &[
            FieldDef::scalar("chan1_raw", Scalar::U16),
            FieldDef::scalar("chan2_raw", Scalar::U16),
            FieldDef::scalar("chan3_raw", Scalar::U16),
            FieldDef::scalar("chan4_raw", Scalar::U16),
            FieldDef::scalar("chan5_raw", Scalar::U16),
            FieldDef::scalar("chan6_raw", Scalar::U16),
            FieldDef::scalar("chan7_raw", Scalar::U16),
            FieldDef::scalar("chan8_raw", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::VFR_HUD,
        name: "VFR_HUD",
        length: 20,
        crc_extra: 20,
        fields: &[
            FieldDef::scalar("airspeed", Scalar::F32),
            FieldDef::scalar("groundspeed", Scalar::F32),
            FieldDef::scalar("alt", Scalar::F32),
            FieldDef::scalar("climb", Scalar::F32),
            FieldDef::scalar("heading", Scalar::I16),
            FieldDef::scalar("throttle", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::COMMAND_LONG,
        name: "COMMAND_LONG",
        length: 33,
        crc_extra: 152,
        fields: &[
            FieldDef::scalar("param1", Scalar::F32),
            FieldDef::scalar("param2", Scalar::F32),
            FieldDef::scalar("param3", Scalar::F32),
            FieldDef::scalar("param4", Scalar::F32),
            FieldDef::scalar("param5", Scalar::F32),
            FieldDef::scalar("param6", Scalar::F32),
            FieldDef::scalar("param7", Scalar::F32),
            FieldDef::scalar("command", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("confirmation", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::COMMAND_ACK,
        name: "COMMAND_ACK",
        length: 3,
        crc_extra: 143,
        fields: &[
            FieldDef::scalar("command", Scalar::U16),
            FieldDef::scalar("result", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::ROLL_PITCH_YAW_RATES_THRUST_SETPOINT,
        name: "ROLL_PITCH_YAW_RATES_THRUST_SETPOINT",
        length: 20,
        crc_extra: 127,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("roll_rate", Scalar::F32),
            FieldDef::scalar("pitch_rate", Scalar::F32),
            FieldDef::scalar("yaw_rate", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::MANUAL_SETPOINT,
        name: "MANUAL_SETPOINT",
        length: 22,
        crc_extra: 106,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
            FieldDef::scalar("mode_switch", Scalar::U8),
            FieldDef::scalar("manual_override_switch", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::ATTITUDE_SETPOINT_EXTERNAL,
        name: "ATTITUDE_SETPOINT_EXTERNAL",
        length: 39,
        crc_extra: 147,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::array("q", Scalar::F32, 4),
            FieldDef::scalar("body_roll_rate", Scalar::F32),
            FieldDef::scalar("body_pitch_rate", Scalar::F32),
            FieldDef::scalar("body_yaw_rate", Scalar::F32),
            FieldDef::scalar("thrust", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("type_mask", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOCAL_NED_POSITION_SETPOINT_EXTERNAL,
        name: "LOCAL_NED_POSITION_SETPOINT_EXTERNAL",
        length: 45,
        crc_extra: 211,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("vx", Scalar::F32),
            FieldDef::scalar("vy", Scalar::F32),
            FieldDef::scalar("vz", Scalar::F32),
            FieldDef::scalar("afx", Scalar::F32),
            FieldDef::scalar("afy", Scalar::F32),
            FieldDef::scalar("afz", Scalar::F32),
            FieldDef::scalar("type_mask", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("coordinate_frame", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GLOBAL_POSITION_SETPOINT_EXTERNAL_INT,
        name: "GLOBAL_POSITION_SETPOINT_EXTERNAL_INT",
        length: 44,
        crc_extra: 198,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("lat_int", Scalar::I32),
            FieldDef::scalar("lon_int", Scalar::I32),
            FieldDef::scalar("alt", Scalar::F32),
            FieldDef::scalar("vx", Scalar::F32),
            FieldDef::scalar("vy", Scalar::F32),
            FieldDef::scalar("vz", Scalar::F32),
            FieldDef::scalar("afx", Scalar::F32),
            FieldDef::scalar("afy", Scalar::F32),
            FieldDef::scalar("afz", Scalar::F32),
            FieldDef::scalar("type_mask", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOCAL_POSITION_NED_SYSTEM_GLOBAL_OFFSET,
        name: "LOCAL_POSITION_NED_SYSTEM_GLOBAL_OFFSET",
        length: 28,
        crc_extra: 231,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::HIL_STATE,
        name: "HIL_STATE",
        length: 56,
        crc_extra: 183,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("rollspeed", Scalar::F32),
            FieldDef::scalar("pitchspeed", Scalar::F32),
            FieldDef::scalar("yawspeed", Scalar::F32),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("vx", Scalar::I16),
            FieldDef::scalar("vy", Scalar::I16),
            FieldDef::scalar("vz", Scalar::I16),
            FieldDef::scalar("xacc", Scalar::I16),
            FieldDef::scalar("yacc", Scalar::I16),
            FieldDef::scalar("zacc", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::HIL_CONTROLS,
        name: "HIL_CONTROLS",
        length: 42,
        crc_extra: 63,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("roll_ailerons", Scalar::F32),
            FieldDef::scalar("pitch_elevator", Scalar::F32),
            FieldDef::scalar("yaw_rudder", Scalar::F32),
            FieldDef::scalar("throttle", Scalar::F32),
            FieldDef::scalar("aux1", Scalar::F32),
            FieldDef::scalar("aux2", Scalar::F32),
            FieldDef::scalar("aux3", Scalar::F32),
            FieldDef::scalar("aux4", Scalar::F32),
            FieldDef::scalar("mode", Scalar::U8),
            FieldDef::scalar("nav_mode", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::HIL_RC_INPUTS_RAW,
        name: "HIL_RC_INPUTS_RAW",
        length: 33,
        crc_extra: 54,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("chan1_raw", Scalar::U16),
            FieldDef::scalar("chan2_raw", Scalar::U16),
            FieldDef::scalar("chan3_raw", Scalar::U16),
            FieldDef::scalar("chan4_raw", Scalar::U16),
            FieldDef::scalar("chan5_raw", Scalar::U16),
            FieldDef::scalar("chan6_raw", Scalar::U16),
            FieldDef::scalar("chan7_raw", Scalar::U16),
            FieldDef::scalar("chan8_raw", Scalar::U16),
            FieldDef::scalar("chan9_raw", Scalar::U16),
            FieldDef::scalar("chan10_raw", Scalar::U16),
            FieldDef::scalar("chan11_raw", Scalar::U16),
            FieldDef::scalar("chan12_raw", Scalar::U16),
            FieldDef::scalar("rssi", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::OPTICAL_FLOW,
        name: "OPTICAL_FLOW",
        length: 26,
        crc_extra: 175,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("flow_comp_m_x", Scalar::F32),
            FieldDef::scalar("flow_comp_m_y", Scalar::F32),
            FieldDef::scalar("ground_distance", Scalar::F32),
            FieldDef::scalar("flow_x", Scalar::I16),
            FieldDef::scalar("flow_y", Scalar::I16),
            FieldDef::scalar("sensor_id", Scalar::U8),
            FieldDef::scalar("quality", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GLOBAL_VISION_POSITION_ESTIMATE,
        name: "GLOBAL_VISION_POSITION_ESTIMATE",
        length: 32,
        crc_extra: 102,
        fields: &[
            FieldDef::scalar("usec", Scalar::U64),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::VISION_POSITION_ESTIMATE,
        name: "VISION_POSITION_ESTIMATE",
        length: 32,
        crc_extra: 158,
        fields: &[
            FieldDef::scalar("usec", Scalar::U64),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::VISION_SPEED_ESTIMATE,
        name: "VISION_SPEED_ESTIMATE",
        length: 20,
        crc_extra: 208,
        fields: &[
            FieldDef::scalar("usec", Scalar::U64),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::VICON_POSITION_ESTIMATE,
        name: "VICON_POSITION_ESTIMATE",
        length: 32,
        crc_extra: 56,
        fields: &[
            FieldDef::scalar("usec", Scalar::U64),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::HIGHRES_IMU,
        name: "HIGHRES_IMU",
        length: 62,
        crc_extra: 93,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("xacc", Scalar::F32),
            FieldDef::scalar("yacc", Scalar::F32),
            FieldDef::scalar("zacc", Scalar::F32),
            FieldDef::scalar("xgyro", Scalar::F32),
            FieldDef::scalar("ygyro", Scalar::F32),
            FieldDef::scalar("zgyro", Scalar::F32),
            FieldDef::scalar("xmag", Scalar::F32),
            FieldDef::scalar("ymag", Scalar::F32),
            FieldDef::scalar("zmag", Scalar::F32),
            FieldDef::scalar("abs_pressure", Scalar::F32),
            FieldDef::scalar("diff_pressure", Scalar::F32),
            FieldDef::scalar("pressure_alt", Scalar::F32),
            FieldDef::scalar("temperature", Scalar::F32),
            FieldDef::scalar("fields_updated", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::OMNIDIRECTIONAL_FLOW,
        name: "OMNIDIRECTIONAL_FLOW",
        length: 54,
        crc_extra: 211,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("front_distance_m", Scalar::F32),
            FieldDef::array("left", Scalar::I16, 10),
            FieldDef::array("right", Scalar::I16, 10),
            FieldDef::scalar("sensor_id", Scalar::U8),
            FieldDef::scalar("quality", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::HIL_SENSOR,
        name: "HIL_SENSOR",
        length: 64,
        crc_extra: 108,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("xacc", Scalar::F32),
            FieldDef::scalar("yacc", Scalar::F32),
            FieldDef::scalar("zacc", Scalar::F32),
            FieldDef::scalar("xgyro", Scalar::F32),
            FieldDef::scalar("ygyro", Scalar::F32),
            FieldDef::scalar("zgyro", Scalar::F32),
            FieldDef::scalar("xmag", Scalar::F32),
            FieldDef::scalar("ymag", Scalar::F32),
            FieldDef::scalar("zmag", Scalar::F32),
            FieldDef::scalar("abs_pressure", Scalar::F32),
            FieldDef::scalar("diff_pressure", Scalar::F32),
            FieldDef::scalar("pressure_alt", Scalar::F32),
            FieldDef::scalar("temperature", Scalar::F32),
            FieldDef::scalar("fields_updated", Scalar::U32),
        ],
    },
    MessageDescriptor {
        id: id::SIM_STATE,
        name: "SIM_STATE",
        length: 84,
        crc_extra: 32,
        fields: &[
            FieldDef::scalar("q1", Scalar::F32),
            FieldDef::scalar("q2", Scalar::F32),
            FieldDef::scalar("q3", Scalar::F32),
            FieldDef::scalar("q4", Scalar::F32),
            FieldDef::scalar("roll", Scalar::F32),
            FieldDef::scalar("pitch", Scalar::F32),
            FieldDef::scalar("yaw", Scalar::F32),
            FieldDef::scalar("xacc", Scalar::F32),
            FieldDef::scalar("yacc", Scalar::F32),
            FieldDef::scalar("zacc", Scalar::F32),
            FieldDef::scalar("xgyro", Scalar::F32),
            FieldDef::scalar("ygyro", Scalar::F32),
            FieldDef::scalar("zgyro", Scalar::F32),
            FieldDef::scalar("lat", Scalar::F32),
            FieldDef::scalar("lon", Scalar::F32),
            FieldDef::scalar("alt", Scalar::F32),
            FieldDef::scalar("std_dev_horz", Scalar::F32),
            FieldDef::scalar("std_dev_vert", Scalar::F32),
            FieldDef::scalar("vn", Scalar::F32),
            FieldDef::scalar("ve", Scalar::F32),
            FieldDef::scalar("vd", Scalar::F32),
        ],
    },
    MessageDescriptor {
        id: id::RADIO_STATUS,
        name: "RADIO_STATUS",
        length: 9,
        crc_extra: 185,
        fields: &[
            FieldDef::scalar("rxerrors", Scalar::U16),
            FieldDef::scalar("fixed", Scalar::U16),
            FieldDef::scalar("rssi", Scalar::U8),
            FieldDef::scalar("remrssi", Scalar::U8),
            FieldDef::scalar("txbuf", Scalar::U8),
            FieldDef::scalar("noise", Scalar::U8),
            FieldDef::scalar("remnoise", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::FILE_TRANSFER_DIR_LIST,
        name: "FILE_TRANSFER_DIR_LIST",
        length: 249,
        crc_extra: 93,
        fields: &[
            FieldDef::scalar("transfer_uid", Scalar::U64),
            FieldDef::text("dir_path", 240),
            FieldDef::scalar("flags", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::FILE_TRANSFER_RES,
        name: "FILE_TRANSFER_RES",
        length: 9,
        crc_extra: 124,
        fields: &[
            FieldDef::scalar("transfer_uid", Scalar::U64),
            FieldDef::scalar("result", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::HIL_GPS,
        name: "HIL_GPS",
        length: 36,
        crc_extra: 124,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("eph", Scalar::U16),
            FieldDef::scalar("epv", Scalar::U16),
            FieldDef::scalar("vel", Scalar::U16),
            FieldDef::scalar("vn", Scalar::I16),
            FieldDef::scalar("ve", Scalar::I16),
            FieldDef::scalar("vd", Scalar::I16),
            FieldDef::scalar("cog", Scalar::U16),
            FieldDef::scalar("fix_type", Scalar::U8),
            FieldDef::scalar("satellites_visible", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::HIL_OPTICAL_FLOW,
        name: "HIL_OPTICAL_FLOW",
        length: 26,
        crc_extra: 119,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("flow_comp_m_x", Scalar::F32),
            FieldDef::scalar("flow_comp_m_y", Scalar::F32),
            FieldDef::scalar("ground_distance", Scalar::F32),
            FieldDef::scalar("flow_x", Scalar::I16),
            FieldDef::scalar("flow_y", Scalar::I16),
            FieldDef::scalar("sensor_id", Scalar::U8),
            FieldDef::scalar("quality", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::HIL_STATE_QUATERNION,
        name: "HIL_STATE_QUATERNION",
        length: 64,
        crc_extra: 4,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::array("attitude_quaternion", Scalar::F32, 4),
            FieldDef::scalar("rollspeed", Scalar::F32),
            FieldDef::scalar("pitchspeed", Scalar::F32),
            FieldDef::scalar("yawspeed", Scalar::F32),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("vx", Scalar::I16),
            FieldDef::scalar("vy", Scalar::I16),
            FieldDef::scalar("vz", Scalar::I16),
            FieldDef::scalar("ind_airspeed", Scalar::U16),
            FieldDef::scalar("true_airspeed", Scalar::U16),
            FieldDef::scalar("xacc", Scalar::I16),
            FieldDef::scalar("yacc", Scalar::I16),
            FieldDef::scalar("zacc", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::SCALED_IMU2,
        name: "SCALED_IMU2",
        length: 22,
        crc_extra: 76,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("xacc", Scalar::I16),
            FieldDef::scalar("yacc", Scalar::I16),
            FieldDef::scalar("zacc", Scalar::I16),
            FieldDef::scalar("xgyro", Scalar::I16),
            FieldDef::scalar("ygyro", Scalar::I16),
            FieldDef::scalar("zgyro", Scalar::I16),
            FieldDef::scalar("xmag", Scalar::I16),
            FieldDef::scalar("ymag", Scalar::I16),
            FieldDef::scalar("zmag", Scalar::I16),
        ],
    },
    MessageDescriptor {
        id: id::LOG_REQUEST_LIST,
        name: "LOG_REQUEST_LIST",
        length: 6,
        crc_extra: 128,
        fields: &[
            FieldDef::scalar("start", Scalar::U16),
            FieldDef::scalar("end", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOG_ENTRY,
        name: "LOG_ENTRY",
        length: 14,
        crc_extra: 56,
        fields: &[
            FieldDef::scalar("time_utc", Scalar::U32),
            FieldDef::scalar("size", Scalar::U32),
            FieldDef::scalar("id", Scalar::U16),
            FieldDef::scalar("num_logs", Scalar::U16),
            FieldDef::scalar("last_log_num", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::LOG_REQUEST_DATA,
        name: "LOG_REQUEST_DATA",
        length: 12,
        crc_extra: 116,
        fields: &[
            FieldDef::scalar("ofs", Scalar::U32),
            FieldDef::scalar("count", Scalar::U32),
            FieldDef::scalar("id", Scalar::U16),
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOG_DATA,
        name: "LOG_DATA",
        length: 97,
        crc_extra: 134,
        fields: &[
            FieldDef::scalar("ofs", Scalar::U32),
            FieldDef::scalar("id", Scalar::U16),
            FieldDef::scalar("count", Scalar::U8),
            FieldDef::array("data", Scalar::U8, 90),
        ],
    },
    MessageDescriptor {
        id: id::LOG_ERASE,
        name: "LOG_ERASE",
        length: 2,
        crc_extra: 237,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::LOG_REQUEST_END,
        name: "LOG_REQUEST_END",
        length: 2,
        crc_extra: 203,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GPS_INJECT_DATA,
        name: "GPS_INJECT_DATA",
        length: 113,
        crc_extra: 250,
        fields: &[
            FieldDef::scalar("target_system", Scalar::U8),
            FieldDef::scalar("target_component", Scalar::U8),
            FieldDef::scalar("len", Scalar::U8),
            FieldDef::array("data", Scalar::U8, 110),
        ],
    },
    MessageDescriptor {
        id: id::GPS2_RAW,
        name: "GPS2_RAW",
        length: 35,
        crc_extra: 87,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("alt", Scalar::I32),
            FieldDef::scalar("dgps_age", Scalar::U32),
            FieldDef::scalar("eph", Scalar::U16),
            FieldDef::scalar("epv", Scalar::U16),
            FieldDef::scalar("vel", Scalar::U16),
            FieldDef::scalar("cog", Scalar::U16),
            FieldDef::scalar("fix_type", Scalar::U8),
            FieldDef::scalar("satellites_visible", Scalar::U8),
            FieldDef::scalar("dgps_numch", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::POWER_STATUS,
        name: "POWER_STATUS",
        length: 6,
        crc_extra: 203,
        fields: &[
            FieldDef::scalar("vcc", Scalar::U16),
            FieldDef::scalar("vservo", Scalar::U16),
            FieldDef::scalar("flags", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::SERIAL_CONTROL,
        name: "SERIAL_CONTROL",
        length: 79,
        crc_extra: 220,
        fields: &[
            FieldDef::scalar("baudrate", Scalar::U32),
            FieldDef::scalar("timeout", Scalar::U16),
            FieldDef::scalar("device", Scalar::U8),
            FieldDef::scalar("flags", Scalar::U8),
            FieldDef::scalar("count", Scalar::U8),
            FieldDef::array("data", Scalar::U8, 70),
        ],
    },
    MessageDescriptor {
        id: id::GPS_RTK,
        name: "GPS_RTK",
        length: 35,
        crc_extra: 25,
        fields: &[
            FieldDef::scalar("time_last_baseline_ms", Scalar::U32),
            FieldDef::scalar("tow", Scalar::U32),
            FieldDef::scalar("baseline_a_mm", Scalar::I32),
            FieldDef::scalar("baseline_b_mm", Scalar::I32),
            FieldDef::scalar("baseline_c_mm", Scalar::I32),
            FieldDef::scalar("accuracy", Scalar::U32),
            FieldDef::scalar("iar_num_hypotheses", Scalar::I32),
            FieldDef::scalar("wn", Scalar::U16),
            FieldDef::scalar("rtk_receiver_id", Scalar::U8),
            FieldDef::scalar("rtk_health", Scalar::U8),
            FieldDef::scalar("rtk_rate", Scalar::U8),
            FieldDef::scalar("nsats", Scalar::U8),
            FieldDef::scalar("baseline_coords_type", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::GPS2_RTK,
        name: "GPS2_RTK",
        length: 35,
        crc_extra: 226,
        fields: &[
            FieldDef::scalar("time_last_baseline_ms", Scalar::U32),
            FieldDef::scalar("tow", Scalar::U32),
            FieldDef::scalar("baseline_a_mm", Scalar::I32),
            FieldDef::scalar("baseline_b_mm", Scalar::I32),
            FieldDef::scalar("baseline_c_mm", Scalar::I32),
            FieldDef::scalar("accuracy", Scalar::U32),
            FieldDef::scalar("iar_num_hypotheses", Scalar::I32),
            FieldDef::scalar("wn", Scalar::U16),
            FieldDef::scalar("rtk_receiver_id", Scalar::U8),
            FieldDef::scalar("rtk_health", Scalar::U8),
            FieldDef::scalar("rtk_rate", Scalar::U8),
            FieldDef::scalar("nsats", Scalar::U8),
            FieldDef::scalar("baseline_coords_type", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::DATA_TRANSMISSION_HANDSHAKE,
        name: "DATA_TRANSMISSION_HANDSHAKE",
        length: 13,
        crc_extra: 29,
        fields: &[
            FieldDef::scalar("size", Scalar::U32),
            FieldDef::scalar("width", Scalar::U16),
            FieldDef::scalar("height", Scalar::U16),
            FieldDef::scalar("packets", Scalar::U16),
            FieldDef::scalar("type", Scalar::U8),
            FieldDef::scalar("payload", Scalar::U8),
            FieldDef::scalar("jpg_quality", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::DISTANCE_SENSOR,
        name: "DISTANCE_SENSOR",
        length: 14,
        crc_extra: 85,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("min_distance", Scalar::U16),
            FieldDef::scalar("max_distance", Scalar::U16),
            FieldDef::scalar("current_distance", Scalar::U16),
            FieldDef::scalar("type", Scalar::U8),
            FieldDef::scalar("id", Scalar::U8),
            FieldDef::scalar("orientation", Scalar::U8),
            FieldDef::scalar("covariance", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::TERRAIN_REQUEST,
        name: "TERRAIN_REQUEST",
        length: 18,
        crc_extra: 6,
        fields: &[
            FieldDef::scalar("mask", Scalar::U64),
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("grid_spacing", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::TERRAIN_DATA,
        name: "TERRAIN_DATA",
        length: 43,
        crc_extra: 229,
        fields: &[
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("grid_spacing", Scalar::U16),
            FieldDef::array("data", Scalar::I16, 16),
            FieldDef::scalar("gridbit", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::TERRAIN_CHECK,
        name: "TERRAIN_CHECK",
        length: 8,
        crc_extra: 203,
        fields: &[
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
        ],
    },
    MessageDescriptor {
        id: id::TERRAIN_REPORT,
        name: "TERRAIN_REPORT",
        length: 22,
        crc_extra: 1,
        fields: &[
            FieldDef::scalar("lat", Scalar::I32),
            FieldDef::scalar("lon", Scalar::I32),
            FieldDef::scalar("terrain_height", Scalar::F32),
            FieldDef::scalar("current_height", Scalar::F32),
            FieldDef::scalar("spacing", Scalar::U16),
            FieldDef::scalar("pending", Scalar::U16),
            FieldDef::scalar("loaded", Scalar::U16),
        ],
    },
    MessageDescriptor {
        id: id::BATTERY_STATUS,
        name: "BATTERY_STATUS",
        length: 24,
        crc_extra: 177,
        fields: &[
            FieldDef::scalar("current_consumed", Scalar::I32),
            FieldDef::scalar("energy_consumed", Scalar::I32),
            FieldDef::scalar("voltage_cell_1", Scalar::U16),
            FieldDef::scalar("voltage_cell_2", Scalar::U16),
            FieldDef::scalar("voltage_cell_3", Scalar::U16),
            FieldDef::scalar("voltage_cell_4", Scalar::U16),
            FieldDef::scalar("voltage_cell_5", Scalar::U16),
            FieldDef::scalar("voltage_cell_6", Scalar::U16),
            FieldDef::scalar("current_battery", Scalar::I16),
            FieldDef::scalar("accu_id", Scalar::U8),
            FieldDef::scalar("battery_remaining", Scalar::I8),
        ],
    },
    MessageDescriptor {
        id: id::SETPOINT_8DOF,
        name: "SETPOINT_8DOF",
        length: 33,
        crc_extra: 241,
        fields: &[
            FieldDef::scalar("val1", Scalar::F32),
            FieldDef::scalar("val2", Scalar::F32),
            FieldDef::scalar("val3", Scalar::F32),
            FieldDef::scalar("val4", Scalar::F32),
            FieldDef::scalar("val5", Scalar::F32),
            FieldDef::scalar("val6", Scalar::F32),
            FieldDef::scalar("val7", Scalar::F32),
            FieldDef::scalar("val8", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::SETPOINT_6DOF,
        name: "SETPOINT_6DOF",
        length: 25,
        crc_extra: 15,
        fields: &[
            FieldDef::scalar("trans_x", Scalar::F32),
            FieldDef::scalar("trans_y", Scalar::F32),
            FieldDef::scalar("trans_z", Scalar::F32),
            FieldDef::scalar("rot_x", Scalar::F32),
            FieldDef::scalar("rot_y", Scalar::F32),
            FieldDef::scalar("rot_z", Scalar::F32),
            FieldDef::scalar("target_system", Scalar::U8),
        ],
    },
    MessageDescriptor {
        id: id::MEMORY_VECT,
        name: "MEMORY_VECT",
        length: 36,
        crc_extra: 204,
        fields: &[
            FieldDef::scalar("address", Scalar::U16),
            FieldDef::scalar("ver", Scalar::U8),
            FieldDef::scalar("type", Scalar::U8),
            FieldDef::array("value", Scalar::I8, 32),
        ],
    },
    MessageDescriptor {
        id: id::DEBUG_VECT,
        name: "DEBUG_VECT",
        length: 30,
        crc_extra: 49,
        fields: &[
            FieldDef::scalar("time_usec", Scalar::U64),
            FieldDef::scalar("x", Scalar::F32),
            FieldDef::scalar("y", Scalar::F32),
            FieldDef::scalar("z", Scalar::F32),
            FieldDef::text("name", 10),
        ],
    },
    MessageDescriptor {
        id: id::NAMED_VALUE_FLOAT,
        name: "NAMED_VALUE_FLOAT",
        length: 18,
        crc_extra: 170,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("value", Scalar::F32),
            FieldDef::text("name", 10),
        ],
    },
    MessageDescriptor {
        id: id::NAMED_VALUE_INT,
        name: "NAMED_VALUE_INT",
        length: 18,
        crc_extra: 44,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("value", Scalar::I32),
            FieldDef::text("name", 10),
        ],
    },
    MessageDescriptor {
        id: id::STATUSTEXT,
        name: "STATUSTEXT",
        length: 51,
        crc_extra: 83,
        fields: &[
            FieldDef::scalar("severity", Scalar::U8),
            FieldDef::text("text", 50),
        ],
    },
    MessageDescriptor {
        id: id::DEBUG,
        name: "DEBUG",
        length: 9,
        crc_extra: 46,
        fields: &[
            FieldDef::scalar("time_boot_ms", Scalar::U32),
            FieldDef::scalar("value", Scalar::F32),
            FieldDef::scalar("ind", Scalar::U8),
        ],
    },
];
