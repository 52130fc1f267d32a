//! Review creation and eligibility rules.
//!
//! A review tied to a booking is only allowed when the booking belongs to the
//! reviewer, matches the reviewed vehicle, and is completed, and each booking
//! carries at most one review. Reviews are stored under the vehicle's external
//! code, with the reviewer's display name resolved from their profile.

use entity::booking::BookingStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        booking::BookingRepository, profile::ProfileRepository, review::ReviewRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::review::{CreateReviewParams, Review, ReviewEligibility},
};

const INELIGIBLE_BOOKING: &str =
    "Cannot create review: booking not found, not completed, or does not match vehicle";

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists reviews for a vehicle code, newest first.
    pub async fn list_for_vehicle(&self, vehicle_code: &str) -> Result<Vec<Review>, AppError> {
        let reviews = ReviewRepository::new(self.db)
            .list_by_vehicle_code(vehicle_code)
            .await?;

        Ok(reviews.into_iter().map(Review::from_entity).collect())
    }

    /// Creates a review on behalf of the authenticated user.
    ///
    /// # Returns
    /// - `Ok(Review)`: Review stored under the vehicle's external code
    /// - `Err(AppError::BadRequest)`: Stars outside 1-5 or booking already reviewed
    /// - `Err(AppError::Forbidden)`: Booking missing, foreign, mismatched, or not completed
    /// - `Err(AppError::NotFound)`: Unknown vehicle
    pub async fn create(
        &self,
        user_id: Uuid,
        params: CreateReviewParams,
    ) -> Result<Review, AppError> {
        if !(1..=5).contains(&params.stars) {
            return Err(AppError::BadRequest(
                "Stars must be between 1 and 5".to_string(),
            ));
        }

        let reviewer_name = self.reviewer_name(user_id).await?;

        if let Some(booking_id) = params.booking_id {
            let booking = BookingRepository::new(self.db)
                .find_for_user(booking_id, user_id)
                .await?;

            let eligible = booking.is_some_and(|booking| {
                booking.vehicle_id == params.vehicle_id
                    && booking.status == BookingStatus::Completed
            });
            if !eligible {
                return Err(AppError::Forbidden(INELIGIBLE_BOOKING.to_string()));
            }

            if ReviewRepository::new(self.db)
                .find_by_booking(booking_id)
                .await?
                .is_some()
            {
                return Err(AppError::BadRequest(
                    "Review already exists for this booking".to_string(),
                ));
            }
        }

        let Some(vehicle) = VehicleRepository::new(self.db)
            .find_by_id(params.vehicle_id)
            .await?
        else {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        };

        let review = ReviewRepository::new(self.db)
            .create(
                vehicle.code,
                reviewer_name,
                params.body,
                params.stars,
                params.booking_id,
                Some(user_id),
            )
            .await?;

        Ok(Review::from_entity(review))
    }

    /// Non-mutating eligibility check backing the review form.
    pub async fn eligibility(
        &self,
        booking_id: Uuid,
        user_id: Uuid,
    ) -> Result<ReviewEligibility, AppError> {
        let Some(booking) = BookingRepository::new(self.db)
            .find_for_user(booking_id, user_id)
            .await?
        else {
            return Ok(ReviewEligibility::Ineligible {
                reason: "Booking not found".to_string(),
                review_id: None,
            });
        };

        if booking.status != BookingStatus::Completed {
            return Ok(ReviewEligibility::Ineligible {
                reason: format!(
                    "Booking is not completed yet (status: {})",
                    booking.status.as_str()
                ),
                review_id: None,
            });
        }

        if let Some(review) = ReviewRepository::new(self.db)
            .find_by_booking(booking_id)
            .await?
        {
            return Ok(ReviewEligibility::Ineligible {
                reason: "Review already submitted for this booking".to_string(),
                review_id: Some(review.id),
            });
        }

        let vehicle_code = VehicleRepository::new(self.db)
            .find_by_id(booking.vehicle_id)
            .await?
            .map(|vehicle| vehicle.code)
            .unwrap_or_default();

        Ok(ReviewEligibility::Eligible {
            booking_id,
            vehicle_id: booking.vehicle_id,
            vehicle_code,
        })
    }

    /// Resolves the reviewer's display name: "full_name last_name" when both
    /// are set, the full name alone otherwise, "Anonymous" without a profile.
    async fn reviewer_name(&self, user_id: Uuid) -> Result<String, AppError> {
        let profile = ProfileRepository::new(self.db).find_by_id(user_id).await?;

        let name = profile
            .and_then(|profile| {
                profile.full_name.map(|full_name| match profile.last_name {
                    Some(last_name) => format!("{} {}", full_name, last_name),
                    None => full_name,
                })
            })
            .unwrap_or_else(|| "Anonymous".to_string());

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    async fn completed_booking(
        db: &sea_orm::DatabaseConnection,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<entity::booking::Model, sea_orm::DbErr> {
        factory::booking::BookingFactory::new(db, user_id, vehicle_id)
            .status(BookingStatus::Completed)
            .pickup_date(Utc::now() - Duration::days(10))
            .dropoff_date(Utc::now() - Duration::days(3))
            .build()
            .await
    }

    #[tokio::test]
    async fn create_stores_review_under_vehicle_code() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        factory::create_profile(db, &user).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let booking = completed_booking(db, user.id, vehicle.id).await?;

        let review = ReviewService::new(db)
            .create(
                user.id,
                CreateReviewParams {
                    vehicle_id: vehicle.id,
                    body: "Smooth handover, clean car.".to_string(),
                    stars: 5,
                    booking_id: Some(booking.id),
                },
            )
            .await?;

        assert_eq!(review.vehicle_code, vehicle.code);
        assert_eq!(review.reviewer_name, "Test Renter");
        assert_eq!(review.booking_id, Some(booking.id));

        Ok(())
    }

    #[tokio::test]
    async fn create_falls_back_to_anonymous_without_profile_name() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;

        let review = ReviewService::new(db)
            .create(
                user.id,
                CreateReviewParams {
                    vehicle_id: vehicle.id,
                    body: "Decent.".to_string(),
                    stars: 3,
                    booking_id: None,
                },
            )
            .await?;

        assert_eq!(review.reviewer_name, "Anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_stars_outside_range() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = ReviewService::new(db);

        for stars in [0, 6] {
            let result = service
                .create(
                    user.id,
                    CreateReviewParams {
                        vehicle_id: vehicle.id,
                        body: "n/a".to_string(),
                        stars,
                        booking_id: None,
                    },
                )
                .await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_booking_of_another_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_user(db).await?;
        let stranger = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let booking = completed_booking(db, owner.id, vehicle.id).await?;

        let result = ReviewService::new(db)
            .create(
                stranger.id,
                CreateReviewParams {
                    vehicle_id: vehicle.id,
                    body: "Not mine.".to_string(),
                    stars: 4,
                    booking_id: Some(booking.id),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unfinished_or_mismatched_booking() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let other_vehicle = factory::create_vehicle(db).await?;
        let service = ReviewService::new(db);

        let running = factory::create_booking(db, user.id, vehicle.id).await?;
        let result = service
            .create(
                user.id,
                CreateReviewParams {
                    vehicle_id: vehicle.id,
                    body: "Too early.".to_string(),
                    stars: 4,
                    booking_id: Some(running.id),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let completed = completed_booking(db, user.id, vehicle.id).await?;
        let result = service
            .create(
                user.id,
                CreateReviewParams {
                    vehicle_id: other_vehicle.id,
                    body: "Wrong car.".to_string(),
                    stars: 4,
                    booking_id: Some(completed.id),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_second_review_for_same_booking() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let booking = completed_booking(db, user.id, vehicle.id).await?;
        let service = ReviewService::new(db);

        let params = CreateReviewParams {
            vehicle_id: vehicle.id,
            body: "Great.".to_string(),
            stars: 5,
            booking_id: Some(booking.id),
        };
        service.create(user.id, params.clone()).await?;

        let result = service.create(user.id, params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn eligibility_reports_each_blocking_condition() -> Result<(), AppError> {
        let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = ReviewService::new(db);

        // Unknown booking.
        let unknown = service.eligibility(Uuid::new_v4(), user.id).await?;
        assert!(matches!(unknown, ReviewEligibility::Ineligible { .. }));

        // Not yet completed.
        let running = factory::create_booking(db, user.id, vehicle.id).await?;
        let pending = service.eligibility(running.id, user.id).await?;
        assert!(matches!(pending, ReviewEligibility::Ineligible { .. }));

        // Completed and unreviewed: eligible, with the vehicle code resolved.
        let completed = completed_booking(db, user.id, vehicle.id).await?;
        let eligible = service.eligibility(completed.id, user.id).await?;
        match eligible {
            ReviewEligibility::Eligible {
                booking_id,
                vehicle_id,
                vehicle_code,
            } => {
                assert_eq!(booking_id, completed.id);
                assert_eq!(vehicle_id, vehicle.id);
                assert_eq!(vehicle_code, vehicle.code);
            }
            other => panic!("expected eligible, got {:?}", other),
        }

        // Already reviewed: ineligible and points at the existing review.
        let review = factory::review::ReviewFactory::new(db, &vehicle.code)
            .booking_id(Some(completed.id))
            .user_id(Some(user.id))
            .build()
            .await?;
        let reviewed = service.eligibility(completed.id, user.id).await?;
        match reviewed {
            ReviewEligibility::Ineligible { review_id, .. } => {
                assert_eq!(review_id, Some(review.id));
            }
            other => panic!("expected ineligible, got {:?}", other),
        }

        Ok(())
    }
}
