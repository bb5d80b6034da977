use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use health_tracker_rs::backend::{HttpBackend, SaveOutcome, SaveRequest, SaveService, Session};
use health_tracker_rs::models::{WellBeingReport, WorkoutEntry};

/// One request as seen by the stub server.
#[derive(Debug)]
struct Recorded {
    request_line: String,
    headers: HashMap<String, String>,
    body: String,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Accept a single connection, record the request and answer with `status`
/// and `body`.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Recorded>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = HashMap::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_lowercase(), value.trim().to_string());
            }
        }

        let length = headers
            .get("content-length")
            .map(|v| v.parse::<usize>().unwrap())
            .unwrap_or(0);
        let mut raw = vec![0; length];
        reader.read_exact(&mut raw).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();

        Recorded {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(raw).unwrap(),
        }
    });

    (base_url, handle)
}

fn squats() -> WorkoutEntry {
    WorkoutEntry {
        name: "Squats".to_string(),
        sets: 3,
        reps: 10,
        duration_minutes: 20,
        calories: 50.0,
    }
}

#[test]
fn test_add_workout_sends_query_and_bearer_token() {
    let (base_url, server) = serve_once("200 OK", "{}");
    let session = Session::new(&base_url, "7", "s3cret");
    let entry = squats();

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::Workout(&entry))
        .unwrap();
    let request = server.join().unwrap();

    assert_eq!(outcome, SaveOutcome::Acknowledged);
    assert_eq!(
        request.request_line,
        "POST /health/fitness/7/add-workout?workoutName=Squats&inputReps=10&inputSets=3&inputDuration=20 HTTP/1.1"
    );
    assert_eq!(request.header("authorization"), Some("Bearer s3cret"));
}

#[test]
fn test_custom_workout_posts_json_body() {
    let (base_url, server) = serve_once("200 OK", "{}");
    let session = Session::new(&base_url, "7", "s3cret");
    let entry = WorkoutEntry {
        name: "Rowing".to_string(),
        sets: 1,
        reps: 1,
        duration_minutes: 30,
        calories: 240.0,
    };

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::CustomWorkout(&entry))
        .unwrap();
    let request = server.join().unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        request.request_line,
        "POST /health/fitness/7/add-custom-workout HTTP/1.1"
    );
    assert_eq!(request.header("authorization"), Some("Bearer s3cret"));
    assert_eq!(
        request.json(),
        serde_json::json!({
            "workoutName": "Rowing",
            "reps": 1,
            "duration": 30,
            "sets": 1,
            "caloriesBurned": 240.0
        })
    );
}

#[test]
fn test_server_error_is_rejected() {
    let (base_url, server) = serve_once("500 Internal Server Error", "{}");
    let session = Session::new(&base_url, "7", "s3cret");
    let entry = squats();

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::Workout(&entry))
        .unwrap();
    server.join().unwrap();

    assert!(matches!(outcome, SaveOutcome::Rejected(ref reason) if reason.contains("500")));
}

#[test]
fn test_workout_log_null_body_is_rejected() {
    let (base_url, server) = serve_once("200 OK", "null");
    let session = Session::new(&base_url, "7", "s3cret");

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::WorkoutLog)
        .unwrap();
    let request = server.join().unwrap();

    assert!(!outcome.is_success());
    assert_eq!(
        request.request_line,
        "POST /health/fitness/7/save-workouts HTTP/1.1"
    );
    assert_eq!(request.header("authorization"), Some("Bearer s3cret"));
}

#[test]
fn test_workout_log_with_body_is_acknowledged() {
    let (base_url, server) = serve_once("200 OK", r#"[{"workoutName": "Squats"}]"#);
    let session = Session::new(&base_url, "7", "s3cret");

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::WorkoutLog)
        .unwrap();
    server.join().unwrap();

    assert_eq!(outcome, SaveOutcome::Acknowledged);
}

#[test]
fn test_wellbeing_uses_raw_token_and_user_query() {
    let (base_url, server) = serve_once("200 OK", "Wellbeing saved");
    let session = Session::new(&base_url, "7", "s3cret");
    let report = WellBeingReport {
        sleep_hours: 7.5,
        mood: "Happy".to_string(),
    };

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::WellBeing(&report))
        .unwrap();
    let request = server.join().unwrap();

    assert_eq!(outcome, SaveOutcome::Acknowledged);
    assert_eq!(request.request_line, "POST /wellbeing?userId=7 HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("s3cret"));
    assert_eq!(
        request.json(),
        serde_json::json!({ "sleepTime": 7.5, "mood": "Happy" })
    );
}

#[test]
fn test_wellbeing_other_reply_is_rejected() {
    let (base_url, server) = serve_once("200 OK", "User not found");
    let session = Session::new(&base_url, "7", "s3cret");
    let report = WellBeingReport {
        sleep_hours: 4.0,
        mood: "Sad".to_string(),
    };

    let outcome = HttpBackend::new()
        .unwrap()
        .save(&session, SaveRequest::WellBeing(&report))
        .unwrap();
    server.join().unwrap();

    assert_eq!(outcome, SaveOutcome::Rejected("User not found".to_string()));
}

#[test]
fn test_fetch_workout_catalogue() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[{"workoutId": 1, "workoutName": "Squats", "caloriesBurned": 5},
            {"workoutId": 2, "workoutName": "", "caloriesBurned": 3}]"#,
    );

    let table = HttpBackend::new()
        .unwrap()
        .fetch_workout_table(&format!("{}/workouts", base_url))
        .unwrap();
    let request = server.join().unwrap();

    assert_eq!(request.request_line, "GET /workouts HTTP/1.1");
    assert_eq!(table.len(), 1);
    assert!(table.contains("squats"));
}
