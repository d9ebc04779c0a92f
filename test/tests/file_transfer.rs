use proptest::prelude::*;

use vabridge_client::{
    transport::Dialer, Connection, FileTransferError, FileTransferSession, LauncherClient,
    LauncherConfig, LauncherError, TransferCompletion, TransferState,
};
use vabridge_shared::{FileMetadata, NodeRole, ReproductionMode, FILE_CHUNK_SIZE};
use vabridge_test::{launcher_addr, MemoryFiles, ScriptedLauncher, LAUNCHER_HOST, LAUNCHER_PORT};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn connection(launcher: &ScriptedLauncher) -> Connection {
    let stream = launcher
        .dialer()
        .dial(launcher_addr())
        .expect("scripted dial succeeds");
    Connection::new(launcher_addr(), stream)
}

fn metadata(payload: &[u8]) -> FileMetadata {
    FileMetadata::new("audio/ir.wav", payload.len() as u64, "ProjA", 1_700_000_000)
}

// Writes following the metadata record
fn payload_writes(launcher: &ScriptedLauncher, metadata: &FileMetadata) -> Vec<Vec<u8>> {
    let writes = launcher.writes();
    assert_eq!(writes[0], metadata.to_bytes());
    writes[1..].to_vec()
}

fn proja_client(launcher: &ScriptedLauncher, files: MemoryFiles) -> LauncherClient {
    let config = LauncherConfig {
        project_name: "ProjA".to_string(),
        ..LauncherConfig::default()
    };
    LauncherClient::new(config, NodeRole::Master, launcher.dialer(), files)
}

#[test]
fn exists_reply_streams_nothing() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher.reply_text("exists");
    let payload = vec![7u8; 3000];
    let metadata = metadata(&payload);
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata.clone(), &payload).unwrap();
    let result = session.run(&mut connection);

    assert_eq!(result, Ok(TransferCompletion::AlreadyExists));
    assert_eq!(session.state(), TransferState::Done);
    assert_eq!(session.bytes_streamed(), 0);
    assert!(payload_writes(&launcher, &metadata).is_empty());
}

#[test]
fn ack_streams_payload_in_full_chunks() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher.reply_text("ack").reply_text("ack");
    let payload: Vec<u8> = (0..2500u32).map(|i| (i % 251) as u8).collect();
    let metadata = metadata(&payload);
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata.clone(), &payload).unwrap();
    let result = session.run(&mut connection);

    assert_eq!(result, Ok(TransferCompletion::Uploaded { bytes: 2500 }));
    let chunks = payload_writes(&launcher, &metadata);
    let sizes: Vec<usize> = chunks.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![FILE_CHUNK_SIZE, FILE_CHUNK_SIZE, 452]);
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn partial_sends_resume_where_the_transport_stopped() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher
        .accept_at_most(700)
        .reply_text("ack")
        .reply_text("ack");
    let payload: Vec<u8> = (0..2048u32).map(|i| (i % 7) as u8).collect();
    let metadata = metadata(&payload);
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata.clone(), &payload).unwrap();
    let result = session.run(&mut connection);

    assert_eq!(result, Ok(TransferCompletion::Uploaded { bytes: 2048 }));
    let chunks = payload_writes(&launcher, &metadata);
    assert!(chunks.iter().all(|chunk| chunk.len() <= 700));
    assert_eq!(chunks.concat(), payload);
}

#[test]
fn rejected_metadata_streams_nothing() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher.reply_text("no space");
    let payload = vec![1u8; 10];
    let metadata = metadata(&payload);
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata.clone(), &payload).unwrap();
    let result = session.run(&mut connection);

    assert_eq!(
        result,
        Err(FileTransferError::Rejected {
            reply: "no space".to_string()
        })
    );
    assert_eq!(session.state(), TransferState::Failed);
    assert!(payload_writes(&launcher, &metadata).is_empty());
}

#[test]
fn missing_final_ack_fails_the_transfer() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher.reply_text("ack").reply_text("checksum");
    let payload = vec![2u8; 64];
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata(&payload), &payload).unwrap();
    let result = session.run(&mut connection);

    assert_eq!(
        result,
        Err(FileTransferError::FinalAckMissing {
            reply: "checksum".to_string()
        })
    );
    assert_eq!(session.bytes_streamed(), 64);
}

#[test]
fn silent_launcher_is_no_reply() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    let payload = vec![2u8; 8];
    let mut connection = connection(&launcher);

    let mut session = FileTransferSession::new(metadata(&payload), &payload).unwrap();

    assert!(matches!(
        session.run(&mut connection),
        Err(FileTransferError::NoReply { .. })
    ));
}

#[test]
fn declared_length_must_match_payload() {
    let payload = vec![0u8; 41];
    let metadata = FileMetadata::new("cfg.ini", 42, "ProjA", 1_700_000_000);

    let result = FileTransferSession::new(metadata, &payload);

    assert!(matches!(
        result,
        Err(FileTransferError::LengthMismatch {
            declared: 42,
            actual: 41
        })
    ));
}

#[test]
fn config_upload_registers_search_path_once() {
    init_logging();
    let contents = [b'x'; 42];
    let launcher = ScriptedLauncher::new();
    launcher
        .reply_text("ack")
        .reply_text("ack")
        .reply_text("ack")
        .reply(b"g");
    let files = MemoryFiles::new().with_file("cfg.ini", &contents, 1_700_000_000);
    let mut client = proja_client(&launcher, files);

    let result = client.remote_start(
        LAUNCHER_HOST,
        LAUNCHER_PORT,
        "2022a",
        Some("cfg.ini"),
        ReproductionMode::Binaural,
    );
    assert_eq!(result, Ok(()));

    let writes = launcher.writes();
    assert_eq!(writes[0], b"file:cfg.ini:42:ProjA:1700000000".to_vec());
    assert_eq!(writes[1], contents.to_vec());
    assert_eq!(writes[2], ReproductionMode::Binaural.command_bytes());
    assert_eq!(client.search_paths().registered(), ["../tmp/ProjA".to_string()]);

    // A second upload of the same project does not add the path again
    launcher.reply_text("ack").reply_text("ack");
    assert_eq!(
        client.send_file("cfg.ini"),
        Ok(TransferCompletion::Uploaded { bytes: 42 })
    );
    assert_eq!(client.search_paths().registered().len(), 1);
    assert_eq!(
        client.search_paths_mut().take_pending(),
        vec!["../tmp/ProjA".to_string()]
    );
}

#[test]
fn failed_config_upload_still_launches() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    launcher
        .reply_text("disk full")
        .reply_text("ack")
        .reply(b"g");
    let files = MemoryFiles::new().with_file("cfg.ini", b"[Setup]", 1_700_000_000);
    let mut client = proja_client(&launcher, files);

    let result = client.remote_start(
        LAUNCHER_HOST,
        LAUNCHER_PORT,
        "2022a",
        Some("cfg.ini"),
        ReproductionMode::Binaural,
    );

    assert_eq!(result, Ok(()));
    assert!(client.is_connected());
    assert!(client.search_paths().registered().is_empty());
}

#[test]
fn send_file_checks_policy_and_existence() {
    init_logging();
    let launcher = ScriptedLauncher::new();
    let files = MemoryFiles::new().with_file("cfg.ini", b"[Setup]", 1_700_000_000);
    let mut client = proja_client(&launcher, files.clone());

    assert_eq!(client.send_file("cfg.ini"), Err(LauncherError::NotConnected));

    client.connect(LAUNCHER_HOST, LAUNCHER_PORT).unwrap();
    assert_eq!(
        client.send_file("missing.ini"),
        Err(LauncherError::FileNotFound {
            path: "missing.ini".to_string()
        })
    );

    let config = LauncherConfig {
        copy_files: false,
        ..LauncherConfig::default()
    };
    let mut no_copy = LauncherClient::new(config, NodeRole::Master, launcher.dialer(), files);
    no_copy.connect(LAUNCHER_HOST, LAUNCHER_PORT).unwrap();
    assert_eq!(
        no_copy.send_file("cfg.ini"),
        Err(LauncherError::CopyFilesDisabled {
            path: "cfg.ini".to_string()
        })
    );

    assert!(launcher.writes().is_empty());
}

proptest! {
    #[test]
    fn streamed_chunks_add_up_to_the_payload(
        payload in proptest::collection::vec(any::<u8>(), 0..5000),
        limit in 1usize..2048,
    ) {
        let launcher = ScriptedLauncher::new();
        launcher.accept_at_most(limit).reply_text("ack").reply_text("ack");
        let metadata = FileMetadata::new("p.bin", payload.len() as u64, "ProjA", 0);
        let mut connection = connection(&launcher);

        let mut session = FileTransferSession::new(metadata.clone(), &payload).unwrap();
        let result = session.run(&mut connection);

        prop_assert_eq!(result, Ok(TransferCompletion::Uploaded { bytes: payload.len() as u64 }));

        // The metadata record may itself be split by a small limit
        let record_len = metadata.to_bytes().len();
        let written = launcher.written_bytes();
        prop_assert_eq!(&written[..record_len], &metadata.to_bytes()[..]);
        prop_assert_eq!(&written[record_len..], &payload[..]);
        prop_assert!(launcher.writes().iter().all(|chunk| chunk.len() <= FILE_CHUNK_SIZE));
    }
}
