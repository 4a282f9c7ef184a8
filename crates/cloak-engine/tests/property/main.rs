mod redaction_properties;
mod streaming_properties;
