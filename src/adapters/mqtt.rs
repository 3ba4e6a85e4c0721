//! MQTT publish adapter.
//!
//! Implements [`PublishPort`] over [`esp_idf_svc::mqtt::client::EspMqttClient`].
//! Topic formation and JSON payload encoding live here, on the adapter side
//! of the port: the domain core hands over typed data and this adapter makes
//! exactly one QoS-0 publish attempt per call.
//!
//! Topics follow the fleet convention:
//! `room-temp/{room}`, `room-hum/{room}`, `room-motion/{room}`,
//! `room-light/{room}`.

use esp_idf_svc::mqtt::client::{EspMqttClient, MqttClientConfiguration, QoS};
use log::{debug, info};
use serde_json::json;

use crate::app::ports::PublishPort;
use crate::config::NodeConfig;
use crate::error::PublishError;
use crate::sensors::light::LightReport;
use crate::sensors::motion::MotionState;
use crate::sensors::sht30::Reading;

pub struct MqttPublisher {
    client: EspMqttClient<'static>,
    temp_topic: String,
    hum_topic: String,
    motion_topic: String,
    light_topic: String,
    room: String,
    device_name: String,
    uptime_secs: fn() -> u64,
}

impl MqttPublisher {
    /// Establish a broker session and pre-form the per-room topics.
    pub fn connect(config: &NodeConfig, uptime_secs: fn() -> u64) -> anyhow::Result<Self> {
        let mqtt_config = MqttClientConfiguration {
            client_id: Some(config.device_name.as_str()),
            ..Default::default()
        };
        let (client, mut connection) =
            EspMqttClient::new(config.broker_url.as_str(), &mqtt_config)?;

        // Drive the connection events on a background thread; the publish
        // path itself stays on the main loop.
        std::thread::Builder::new()
            .stack_size(4096)
            .spawn(move || {
                while let Ok(event) = connection.next() {
                    debug!("MQTT event: {:?}", event.payload());
                }
            })?;

        info!("MQTT: connected to {}", config.broker_url);
        Ok(Self {
            client,
            temp_topic: format!("room-temp/{}", config.room),
            hum_topic: format!("room-hum/{}", config.room),
            motion_topic: format!("room-motion/{}", config.room),
            light_topic: format!("room-light/{}", config.room),
            room: config.room.as_str().to_owned(),
            device_name: config.device_name.as_str().to_owned(),
            uptime_secs,
        })
    }
}

// Free function so a publish can borrow the client while the topic string
// stays borrowed from the same struct.
fn publish(
    client: &mut EspMqttClient<'static>,
    topic: &str,
    payload: &[u8],
) -> Result<(), PublishError> {
    client
        .enqueue(topic, QoS::AtMostOnce, false, payload)
        .map(|_| ())
        .map_err(|_| PublishError::TransmitFailed)
}

impl PublishPort for MqttPublisher {
    fn publish_climate(&mut self, reading: &Reading) -> Result<(), PublishError> {
        let timestamp = (self.uptime_secs)();
        let temp_payload = json!({
            "temperature": reading.temperature_c,
            "unit": "C",
            "room": self.room,
            "sensor": "SHT-30",
            "timestamp": timestamp,
            "device_id": self.device_name,
        });
        let hum_payload = json!({
            "humidity": reading.humidity_pct,
            "unit": "%",
            "room": self.room,
            "sensor": "SHT-30",
            "timestamp": timestamp,
            "device_id": self.device_name,
        });

        publish(
            &mut self.client,
            &self.temp_topic,
            temp_payload.to_string().as_bytes(),
        )?;
        publish(
            &mut self.client,
            &self.hum_topic,
            hum_payload.to_string().as_bytes(),
        )
    }

    fn publish_motion(&mut self, state: MotionState) -> Result<(), PublishError> {
        let payload = json!({
            "motion": state == MotionState::Active,
            "state": state.as_str(),
            "room": self.room,
            "sensor": "PIR",
            "timestamp": (self.uptime_secs)(),
            "device_id": self.device_name,
        });
        publish(
            &mut self.client,
            &self.motion_topic,
            payload.to_string().as_bytes(),
        )
    }

    fn publish_light(&mut self, report: &LightReport) -> Result<(), PublishError> {
        let payload = json!({
            "light_percent": report.percent,
            "light_state": report.state.as_str(),
            "unit": "%",
            "room": self.room,
            "sensor": "LDR",
            "timestamp": (self.uptime_secs)(),
            "device_id": self.device_name,
        });
        publish(
            &mut self.client,
            &self.light_topic,
            payload.to_string().as_bytes(),
        )
    }
}
