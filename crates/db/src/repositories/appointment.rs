use crate::models::{DbAppointment, SeedAppointment};
use apptsched_core::models::{
    appointment::{Appointment, AppointmentCreateRequest},
    time_slot::{BookedSlot, ANY_TRAINER},
};
use chrono::{DateTime, Utc};
use eyre::{eyre, Result, WrapErr};
use sqlx::{Pool, Postgres, QueryBuilder};

const APPOINTMENT_COLUMNS: &str =
    "id, trainer_id, user_id, starts_at, ends_at, created_at, updated_at, canceled_at";

// Keeps a bulk insert below the Postgres bind-parameter limit
const SEED_CHUNK_SIZE: usize = 1000;

pub async fn create_appointment(
    pool: &Pool<Postgres>,
    request: &AppointmentCreateRequest,
) -> Result<DbAppointment> {
    let (Some(starts_at), Some(ends_at)) = (request.starts_at, request.ends_at) else {
        return Err(eyre!("Appointment requires both starts_at and ends_at"));
    };

    tracing::debug!(
        "Creating appointment: trainer_id={}, user_id={}, starts_at={}",
        request.trainer_id,
        request.user_id,
        starts_at
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO scheduling.appointments (trainer_id, user_id, starts_at, ends_at)
        VALUES ($1, $2, $3, $4)
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(request.trainer_id)
    .bind(request.user_id)
    .bind(starts_at)
    .bind(ends_at)
    .fetch_one(pool)
    .await
    .wrap_err("Error creating appointment")?;

    tracing::debug!("Appointment created successfully: id={}", appointment.id);
    Ok(appointment)
}

/// Builds the appointment lookup.
///
/// The trainer filter is skipped for [`ANY_TRAINER`] and the window filter is
/// skipped unless both bounds are present.
pub fn build_scheduled_query<'a>(
    trainer_id: i64,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM scheduling.appointments"
    ));
    let mut keyword = " WHERE ";

    if trainer_id != ANY_TRAINER {
        query.push(keyword).push("trainer_id = ").push_bind(trainer_id);
        keyword = " AND ";
    }

    if let (Some(starts_at), Some(ends_at)) = (starts_at, ends_at) {
        query
            .push(keyword)
            .push("starts_at >= ")
            .push_bind(starts_at)
            .push(" AND ends_at <= ")
            .push_bind(ends_at);
    }

    query.push(" ORDER BY starts_at ASC");
    query
}

/// Builds the lookup of bookings that start inside `[starts_at, ends_at)`.
///
/// Only the start instant is bounded: availability emits any candidate that
/// starts before `ends_at`, so a booking running past the window end still
/// occupies its slot.
pub fn build_booked_slots_query<'a>(
    trainer_id: i64,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new(format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM scheduling.appointments WHERE "
    ));

    if trainer_id != ANY_TRAINER {
        query.push("trainer_id = ").push_bind(trainer_id).push(" AND ");
    }

    query
        .push("starts_at >= ")
        .push_bind(starts_at)
        .push(" AND starts_at < ")
        .push_bind(ends_at)
        .push(" ORDER BY starts_at ASC");
    query
}

pub async fn get_scheduled_appointments(
    pool: &Pool<Postgres>,
    trainer_id: i64,
    starts_at: Option<DateTime<Utc>>,
    ends_at: Option<DateTime<Utc>>,
) -> Result<Vec<DbAppointment>> {
    let appointments = build_scheduled_query(trainer_id, starts_at, ends_at)
        .build_query_as::<DbAppointment>()
        .fetch_all(pool)
        .await
        .wrap_err("Error getting appointments")?;

    tracing::debug!(
        "Found {} appointments: trainer_id={}, starts_at={:?}, ends_at={:?}",
        appointments.len(),
        trainer_id,
        starts_at,
        ends_at
    );

    Ok(appointments)
}

pub async fn get_booked_slots(
    pool: &Pool<Postgres>,
    trainer_id: i64,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> Result<Vec<BookedSlot>> {
    let appointments = build_booked_slots_query(trainer_id, starts_at, ends_at)
        .build_query_as::<DbAppointment>()
        .fetch_all(pool)
        .await
        .wrap_err("Error getting booked slots")?;

    tracing::debug!(
        "Found {} booked slots: trainer_id={}, starts_at={}, ends_at={}",
        appointments.len(),
        trainer_id,
        starts_at,
        ends_at
    );

    Ok(appointments
        .into_iter()
        .map(|row| Appointment::from(row).booked_slot())
        .collect())
}

/// Bulk-inserts appointments with their explicit ids and moves the id
/// sequence past the highest inserted id.
pub async fn insert_seed_appointments(
    pool: &Pool<Postgres>,
    appointments: &[SeedAppointment],
) -> Result<u64> {
    if appointments.is_empty() {
        return Ok(0);
    }

    let mut inserted = 0;
    for chunk in appointments.chunks(SEED_CHUNK_SIZE) {
        let mut query = QueryBuilder::<Postgres>::new(
            "INSERT INTO scheduling.appointments (id, trainer_id, user_id, starts_at, ends_at) ",
        );
        query.push_values(chunk, |mut row, appointment| {
            row.push_bind(appointment.id)
                .push_bind(appointment.trainer_id)
                .push_bind(appointment.user_id)
                .push_bind(appointment.starts_at)
                .push_bind(appointment.ends_at);
        });

        let result = query
            .build()
            .execute(pool)
            .await
            .wrap_err("Error inserting seed appointments")?;
        inserted += result.rows_affected();
        tracing::debug!("Inserted seed chunk of {} appointments", chunk.len());
    }

    sqlx::query(
        r#"
        SELECT setval(
            pg_get_serial_sequence('scheduling.appointments', 'id'),
            (SELECT MAX(id) FROM scheduling.appointments)
        )
        "#,
    )
    .execute(pool)
    .await
    .wrap_err("Error advancing appointment id sequence")?;

    Ok(inserted)
}
